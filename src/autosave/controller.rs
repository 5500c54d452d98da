//! The autosave controller.

use crate::config::{SessionConfig, DEFAULT_EVENTS};
use crate::error::{Result, SessionError};
use crate::events::EventSource;
use crate::hooks::{HookContext, HookPhase, Hooks, LOAD_EVENT, SAVE_EVENT};
use crate::paths::{PathResolver, ResolvedPath};
use crate::store::SessionStore;
use crate::ui::UserInterface;

use super::state::{LoadOptions, RecordingState, SaveOptions, StopOptions};

/// Owns the recording state and drives saves, loads and autosave.
///
/// Every public operation reports its own failures to the user interface
/// and then returns them; a failed operation leaves the state unchanged.
pub struct AutosaveController<S, E> {
    resolver: PathResolver,
    trigger_events: Vec<String>,
    ensure_directories: bool,
    hooks: Hooks,
    store: S,
    source: E,
    state: RecordingState,
}

impl<S: SessionStore, E: EventSource> AutosaveController<S, E> {
    /// Create a controller with default trigger events and no hooks.
    pub fn new(resolver: PathResolver, store: S, source: E) -> Self {
        Self {
            resolver,
            trigger_events: DEFAULT_EVENTS.iter().map(|e| e.to_string()).collect(),
            ensure_directories: true,
            hooks: Hooks::default(),
            store,
            source,
            state: RecordingState::Idle,
        }
    }

    /// Create a controller from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHook` if a configured hook entry is malformed.
    pub fn from_config(config: &SessionConfig, store: S, source: E) -> Result<Self> {
        Ok(Self::new(PathResolver::from_config(config), store, source)
            .with_trigger_events(config.events.clone())
            .with_ensure_directories(config.ensure_directories)
            .with_hooks(Hooks::from_config(&config.hooks)?))
    }

    /// Replace the resolver.
    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the trigger events.
    pub fn with_trigger_events(mut self, events: Vec<String>) -> Self {
        self.trigger_events = events;
        self
    }

    /// Whether `save` creates missing parent directories.
    pub fn with_ensure_directories(mut self, ensure: bool) -> Self {
        self.ensure_directories = ensure;
        self
    }

    /// Replace the hooks.
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Mutable access to the hooks, for registering callbacks.
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// The path resolver.
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// The trigger events subscribed to while recording.
    pub fn trigger_events(&self) -> &[String] {
        &self.trigger_events
    }

    /// The session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The event source.
    pub fn event_source(&self) -> &E {
        &self.source
    }

    /// The recording state.
    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    /// True while recording.
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// The tracked path while recording.
    pub fn tracked_path(&self) -> Option<&ResolvedPath> {
        self.state.path()
    }

    /// Write the session now and, with `options.autosave`, keep recording at
    /// that path.
    pub fn save(
        &mut self,
        path: Option<&str>,
        options: SaveOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<ResolvedPath> {
        let resolved = match self.resolver.resolve(path, self.ensure_directories) {
            Ok(resolved) => resolved,
            Err(e) => {
                ui.error(&format!("Cannot save session: {}", e));
                return Err(e);
            }
        };

        self.write(&resolved, SAVE_EVENT, ui)?;
        ui.success(&format!("Session saved to {}", resolved));

        if options.autosave {
            self.begin_recording(resolved.clone(), ui)?;
        }
        Ok(resolved)
    }

    /// Restore the session at `path` and, with `options.autosave`, start
    /// recording there.
    pub fn load(
        &mut self,
        path: Option<&str>,
        options: LoadOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<ResolvedPath> {
        let resolved = match self.resolver.resolve(path, false) {
            Ok(resolved) if is_readable_file(&resolved) => resolved,
            Ok(resolved) => {
                return Err(Self::missing(resolved.into_string(), options.silent, ui));
            }
            Err(e) => {
                tracing::debug!("Load path resolution failed: {}", e);
                let requested = match path.unwrap_or(self.resolver.base()) {
                    "" => "(no session path configured)".to_string(),
                    requested => requested.to_string(),
                };
                return Err(Self::missing(requested, options.silent, ui));
            }
        };

        let ctx = HookContext {
            event: LOAD_EVENT,
            path: &resolved,
        };
        self.hooks.run(HookPhase::LoadPre, &ctx, ui);
        if let Err(e) = self.store.restore(&resolved.escaped()) {
            ui.error(&format!("Failed to load session {}: {}", resolved, e));
            return Err(e);
        }
        self.hooks.run(HookPhase::LoadPost, &ctx, ui);
        tracing::info!("Loaded session {}", resolved);
        ui.success(&format!("Session loaded from {}", resolved));

        if options.autosave {
            self.begin_recording(resolved.clone(), ui)?;
        }
        Ok(resolved)
    }

    /// Start recording at `path` without writing.
    pub fn start_autosave(
        &mut self,
        path: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<ResolvedPath> {
        let resolved = match self.resolver.resolve(path, false) {
            Ok(resolved) => resolved,
            Err(e) => {
                ui.error(&format!("Cannot start autosave: {}", e));
                return Err(e);
            }
        };
        self.begin_recording(resolved.clone(), ui)?;
        Ok(resolved)
    }

    /// Stop recording, optionally writing one last time. No-op when idle.
    pub fn stop_autosave(&mut self, options: StopOptions, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(path) = self.end_recording() else {
            tracing::debug!("stop_autosave while idle");
            return Ok(());
        };

        if options.save {
            self.write(&path, SAVE_EVENT, ui)?;
        }
        ui.message(&format!("Stopped autosaving {}", path));
        Ok(())
    }

    /// Deliver a trigger event.
    ///
    /// Writes once at the tracked path if recording and the active
    /// subscription covers `event`. Returns whether a write happened.
    pub fn dispatch(&mut self, event: &str, ui: &mut dyn UserInterface) -> Result<bool> {
        let RecordingState::Recording { path, subscription } = &self.state else {
            return Ok(false);
        };
        if !self.source.is_subscribed(*subscription, event) {
            return Ok(false);
        }

        let path = path.clone();
        self.write(&path, event, ui)?;
        ui.detail(&format!("Autosaved {} on {}", path, event));
        Ok(true)
    }

    /// Run save hooks around one persist call.
    fn write(&mut self, path: &ResolvedPath, event: &str, ui: &mut dyn UserInterface) -> Result<()> {
        let ctx = HookContext { event, path };
        self.hooks.run(HookPhase::SavePre, &ctx, ui);
        if let Err(e) = self.store.persist(&path.escaped()) {
            ui.error(&format!("Failed to save session {}: {}", path, e));
            return Err(e);
        }
        self.hooks.run(HookPhase::SavePost, &ctx, ui);
        tracing::debug!("Persisted session {} ({})", path, event);
        Ok(())
    }

    /// Tear down any current subscription, then subscribe for `path`.
    fn begin_recording(&mut self, path: ResolvedPath, ui: &mut dyn UserInterface) -> Result<()> {
        if let Some(previous) = self.end_recording() {
            if previous != path {
                tracing::info!("Switching autosave from {} to {}", previous, path);
            }
        }

        let subscription = match self.source.subscribe(&self.trigger_events) {
            Ok(id) => id,
            Err(e) => {
                ui.error(&format!("Autosave not started for {}: {}", path, e));
                return Err(e);
            }
        };
        tracing::info!("Recording session at {}", path);
        self.state = RecordingState::Recording { path, subscription };
        Ok(())
    }

    /// Unsubscribe and go idle, returning the path that was tracked.
    fn end_recording(&mut self) -> Option<ResolvedPath> {
        match std::mem::take(&mut self.state) {
            RecordingState::Recording { path, subscription } => {
                self.source.unsubscribe(subscription);
                Some(path)
            }
            RecordingState::Idle => None,
        }
    }

    fn missing(path: String, silent: bool, ui: &mut dyn UserInterface) -> SessionError {
        let err = SessionError::FileNotFound { path };
        if !silent {
            ui.error(&err.to_string());
        }
        err
    }
}

fn is_readable_file(path: &ResolvedPath) -> bool {
    path.as_path().is_file() && std::fs::File::open(path.as_path()).is_ok()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::events::{EventRegistry, SubscriptionId};
    use crate::hooks::{Hook, HookFlow};
    use crate::paths::{escape, PathPlatform};
    use crate::store::MemoryStore;
    use crate::ui::MockUI;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    type Controller = AutosaveController<MemoryStore, EventRegistry>;

    fn controller(base: &str, cwd: &str) -> Controller {
        let resolver = PathResolver::new(base)
            .with_platform(PathPlatform::Unix)
            .with_working_dir(cwd);
        AutosaveController::new(resolver, MemoryStore::new(), EventRegistry::new())
    }

    fn path_in(temp: &TempDir, rel: &str) -> String {
        temp.path().join(rel).to_string_lossy().into_owned()
    }

    #[test]
    fn save_creates_directories_persists_and_records() {
        let temp = TempDir::new().unwrap();
        let target = path_in(&temp, "x/y/s1");
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let resolved = ctl
            .save(Some(&target), SaveOptions::default(), &mut ui)
            .unwrap();

        assert_eq!(resolved.as_str(), target);
        assert!(temp.path().join("x/y").is_dir());
        assert_eq!(ctl.store().persisted(), [resolved.escaped()]);
        assert!(ctl.is_recording());
        assert_eq!(ctl.tracked_path(), Some(&resolved));

        assert!(ctl.dispatch("buffer-entered", &mut ui).unwrap());
        assert_eq!(ctl.store().persisted().len(), 2);
        assert_eq!(ctl.store().persisted()[1], resolved.escaped());
    }

    #[test]
    fn save_passes_escaped_path_to_store() {
        let temp = TempDir::new().unwrap();
        let target = path_in(&temp, "my session#1");
        let mut ctl = controller("", "/");

        ctl.save(Some(&target), SaveOptions { autosave: false }, &mut MockUI::new())
            .unwrap();

        assert_eq!(ctl.store().persisted(), [escape(&target)]);
        assert!(ctl.store().persisted()[0].contains("my\\ session\\#1"));
    }

    #[test]
    fn save_without_autosave_stays_idle() {
        let temp = TempDir::new().unwrap();
        let mut ctl = controller("", "/");

        ctl.save(
            Some(&path_in(&temp, "s1")),
            SaveOptions { autosave: false },
            &mut MockUI::new(),
        )
        .unwrap();

        assert!(!ctl.is_recording());
        assert_eq!(ctl.event_source().active_count(), 0);
    }

    #[test]
    fn save_resolution_failure_leaves_state_unchanged() {
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let err = ctl.save(None, SaveOptions::default(), &mut ui).unwrap_err();

        assert!(matches!(err, SessionError::NoPathConfigured));
        assert!(ui.has_error("session_filepath"));
        assert!(!ctl.is_recording());
        assert!(ctl.store().persisted().is_empty());
    }

    #[test]
    fn save_persist_failure_does_not_start_recording() {
        let temp = TempDir::new().unwrap();
        let resolver = PathResolver::new("")
            .with_platform(PathPlatform::Unix)
            .with_working_dir("/");
        let mut ctl = AutosaveController::new(
            resolver,
            MemoryStore::new().failing_persist(),
            EventRegistry::new(),
        );
        let mut ui = MockUI::new();

        let result = ctl.save(Some(&path_in(&temp, "s1")), SaveOptions::default(), &mut ui);

        assert!(result.is_err());
        assert!(ui.has_error("Failed to save session"));
        assert!(!ctl.is_recording());
        assert_eq!(ctl.event_source().active_count(), 0);
    }

    #[test]
    fn second_save_replaces_subscription() {
        let temp = TempDir::new().unwrap();
        let first = path_in(&temp, "s1");
        let second = path_in(&temp, "s2");
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        ctl.save(Some(&first), SaveOptions::default(), &mut ui).unwrap();
        ctl.save(Some(&second), SaveOptions::default(), &mut ui).unwrap();
        assert_eq!(ctl.event_source().active_count(), 1);

        assert!(ctl.dispatch("exiting", &mut ui).unwrap());
        let (first, second) = (escape(&first), escape(&second));
        assert_eq!(ctl.store().persisted(), [first, second.clone(), second]);
    }

    #[test]
    fn start_autosave_does_not_write() {
        let mut ctl = controller("", "/home/user");
        let mut ui = MockUI::new();

        let path = ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        assert_eq!(path.as_str(), "/home/user/s1");
        assert!(ctl.is_recording());
        assert!(ctl.store().persisted().is_empty());
        assert_eq!(ctl.event_source().active_count(), 1);
    }

    #[test]
    fn start_autosave_failure_stays_idle() {
        let mut ctl = controller("", "/home/user");
        let mut ui = MockUI::new();

        assert!(ctl.start_autosave(Some("/"), &mut ui).is_err());
        assert!(!ctl.is_recording());
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn stop_without_save_ends_writes() {
        let mut ctl = controller("", "/home/user");
        let mut ui = MockUI::new();
        ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        ctl.stop_autosave(StopOptions { save: false }, &mut ui).unwrap();

        assert!(!ctl.is_recording());
        assert_eq!(ctl.event_source().active_count(), 0);
        assert!(!ctl.dispatch("exiting", &mut ui).unwrap());
        assert!(ctl.store().persisted().is_empty());
    }

    #[test]
    fn stop_with_save_writes_final_session() {
        let mut ctl = controller("", "/home/user");
        let mut ui = MockUI::new();
        ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        ctl.stop_autosave(StopOptions::default(), &mut ui).unwrap();

        assert!(!ctl.is_recording());
        assert_eq!(ctl.store().persisted(), ["/home/user/s1"]);
    }

    #[test]
    fn stop_while_idle_is_noop() {
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        ctl.stop_autosave(StopOptions::default(), &mut ui).unwrap();

        assert!(ctl.store().persisted().is_empty());
        assert_eq!(ui.notification_count(), 0);
    }

    #[test]
    fn failed_trigger_write_keeps_recording() {
        let resolver = PathResolver::new("")
            .with_platform(PathPlatform::Unix)
            .with_working_dir("/home/user");
        let mut ctl = AutosaveController::new(
            resolver,
            MemoryStore::new().failing_persist(),
            EventRegistry::new(),
        );
        let mut ui = MockUI::new();
        ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        assert!(ctl.dispatch("exiting", &mut ui).is_err());

        assert_eq!(ui.errors().len(), 1);
        assert!(ctl.is_recording());
        assert_eq!(ctl.event_source().active_count(), 1);
    }

    #[test]
    fn dispatch_ignores_unconfigured_events() {
        let mut ctl = controller("", "/home/user");
        let mut ui = MockUI::new();
        ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        assert!(!ctl.dispatch("focus-lost", &mut ui).unwrap());
        assert!(ctl.store().persisted().is_empty());
    }

    #[test]
    fn dispatch_uses_configured_events() {
        let mut ctl =
            controller("", "/home/user").with_trigger_events(vec!["focus-lost".to_string()]);
        let mut ui = MockUI::new();
        ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        assert!(!ctl.dispatch("exiting", &mut ui).unwrap());
        assert!(ctl.dispatch("focus-lost", &mut ui).unwrap());
        assert_eq!(ctl.store().persisted().len(), 1);
    }

    #[test]
    fn load_missing_file_notifies_once() {
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let err = ctl
            .load(Some("/nonexistent/file"), LoadOptions::default(), &mut ui)
            .unwrap_err();

        assert!(matches!(err, SessionError::FileNotFound { .. }));
        assert_eq!(ui.notification_count(), 1);
        assert!(ui.has_error("/nonexistent/file"));
        assert!(!ctl.is_recording());
        assert!(ctl.store().restored().is_empty());
    }

    #[test]
    fn load_missing_file_silently() {
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let options = LoadOptions {
            silent: true,
            ..Default::default()
        };
        let err = ctl
            .load(Some("/nonexistent/file"), options, &mut ui)
            .unwrap_err();

        assert!(matches!(err, SessionError::FileNotFound { .. }));
        assert_eq!(ui.notification_count(), 0);
    }

    #[test]
    fn load_without_any_path_reports_missing_file() {
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let err = ctl.load(None, LoadOptions::default(), &mut ui).unwrap_err();

        assert!(matches!(err, SessionError::FileNotFound { .. }));
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn load_directory_is_not_a_session_file() {
        let temp = TempDir::new().unwrap();
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let result = ctl.load(
            Some(&temp.path().to_string_lossy()),
            LoadOptions::default(),
            &mut ui,
        );

        assert!(matches!(result, Err(SessionError::FileNotFound { .. })));
    }

    #[test]
    fn load_existing_file_restores_and_records() {
        let temp = TempDir::new().unwrap();
        let target = path_in(&temp, "s1");
        fs::write(&target, "opaque").unwrap();
        let mut ctl = controller("", "/");
        let mut ui = MockUI::new();

        let resolved = ctl
            .load(Some(&target), LoadOptions::default(), &mut ui)
            .unwrap();

        assert_eq!(ctl.store().restored(), [resolved.escaped()]);
        assert!(ctl.store().persisted().is_empty());
        assert_eq!(ctl.tracked_path(), Some(&resolved));
    }

    #[test]
    fn load_without_autosave_stays_idle() {
        let temp = TempDir::new().unwrap();
        let target = path_in(&temp, "s1");
        fs::write(&target, "opaque").unwrap();
        let mut ctl = controller("", "/");

        let options = LoadOptions {
            autosave: false,
            ..Default::default()
        };
        ctl.load(Some(&target), options, &mut MockUI::new()).unwrap();

        assert!(!ctl.is_recording());
        assert_eq!(ctl.store().restored().len(), 1);
    }

    #[test]
    fn load_uses_absolute_mode_base() {
        let temp = TempDir::new().unwrap();
        let base = format!("{}//", temp.path().display());
        let session_dir = temp.path().join("%home%user%proj");
        fs::create_dir_all(&session_dir).unwrap();
        fs::write(session_dir.join("session"), "opaque").unwrap();
        let mut ctl = controller(&base, "/home/user/proj");

        let resolved = ctl
            .load(None, LoadOptions::default(), &mut MockUI::new())
            .unwrap();

        assert_eq!(resolved.as_path(), session_dir.join("session"));
    }

    #[test]
    fn restore_failure_skips_post_hooks_and_stays_idle() {
        let temp = TempDir::new().unwrap();
        let target = path_in(&temp, "s1");
        fs::write(&target, "opaque").unwrap();
        let resolver = PathResolver::new("")
            .with_platform(PathPlatform::Unix)
            .with_working_dir("/");
        let mut ctl = AutosaveController::new(
            resolver,
            MemoryStore::new().failing_restore(),
            EventRegistry::new(),
        );
        let ran_post = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&ran_post);
        ctl.hooks_mut().add(
            HookPhase::LoadPost,
            Hook::callback(move |_| {
                *flag.lock().unwrap() = true;
                HookFlow::Continue
            }),
        );
        let mut ui = MockUI::new();

        let result = ctl.load(Some(&target), LoadOptions::default(), &mut ui);

        assert!(result.is_err());
        assert!(ui.has_error("Failed to load session"));
        assert!(!*ran_post.lock().unwrap());
        assert!(!ctl.is_recording());
    }

    #[test]
    fn pre_hook_stop_still_persists_and_runs_post_hooks() {
        let temp = TempDir::new().unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut ctl = controller("", "/");
        for (phase, name, flow) in [
            (HookPhase::SavePre, "A", HookFlow::Stop),
            (HookPhase::SavePre, "B", HookFlow::Continue),
            (HookPhase::SavePost, "post", HookFlow::Continue),
        ] {
            let log = Arc::clone(&log);
            ctl.hooks_mut().add(
                phase,
                Hook::callback(move |ctx| {
                    log.lock().unwrap().push(format!("{}:{}", name, ctx.event));
                    flow
                }),
            );
        }

        ctl.save(
            Some(&path_in(&temp, "s1")),
            SaveOptions::default(),
            &mut MockUI::new(),
        )
        .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["A:Save", "post:Save"]);
        assert_eq!(ctl.store().persisted().len(), 1);
    }

    #[test]
    fn trigger_writes_tag_hooks_with_event_name() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut ctl = controller("", "/home/user");
        let hook_log = Arc::clone(&log);
        ctl.hooks_mut().add(
            HookPhase::SavePre,
            Hook::callback(move |ctx| {
                hook_log
                    .lock()
                    .unwrap()
                    .push(format!("{}:{}", ctx.event, ctx.path));
                HookFlow::Continue
            }),
        );
        let mut ui = MockUI::new();
        ctl.start_autosave(Some("s1"), &mut ui).unwrap();

        ctl.dispatch("exiting", &mut ui).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["exiting:/home/user/s1"]);
    }

    #[test]
    fn load_hooks_run_around_restore() {
        let temp = TempDir::new().unwrap();
        let target = path_in(&temp, "s1");
        fs::write(&target, "opaque").unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut ctl = controller("", "/");
        for (phase, name) in [(HookPhase::LoadPre, "pre"), (HookPhase::LoadPost, "post")] {
            let log = Arc::clone(&log);
            ctl.hooks_mut().add(
                phase,
                Hook::callback(move |ctx| {
                    log.lock().unwrap().push(format!("{}:{}", name, ctx.event));
                    HookFlow::Continue
                }),
            );
        }

        ctl.load(Some(&target), LoadOptions::default(), &mut MockUI::new())
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["pre:Load", "post:Load"]);
    }

    /// Event source that refuses every subscription.
    #[derive(Default)]
    struct RefusingSource {
        unsubscribed: Vec<SubscriptionId>,
    }

    impl EventSource for RefusingSource {
        fn subscribe(&mut self, events: &[String]) -> Result<SubscriptionId> {
            Err(SessionError::SubscriptionFailed {
                events: events.join(", "),
                message: "host not ready".to_string(),
            })
        }

        fn unsubscribe(&mut self, id: SubscriptionId) {
            self.unsubscribed.push(id);
        }

        fn is_subscribed(&self, _id: SubscriptionId, _event: &str) -> bool {
            false
        }
    }

    #[test]
    fn subscription_failure_leaves_controller_idle() {
        let resolver = PathResolver::new("")
            .with_platform(PathPlatform::Unix)
            .with_working_dir("/home/user");
        let mut ctl =
            AutosaveController::new(resolver, MemoryStore::new(), RefusingSource::default());
        let mut ui = MockUI::new();

        let err = ctl.start_autosave(Some("s1"), &mut ui).unwrap_err();

        assert!(matches!(err, SessionError::SubscriptionFailed { .. }));
        assert!(ui.has_error("host not ready"));
        assert!(!ctl.is_recording());
    }

    #[test]
    fn from_config_applies_settings() {
        let config = crate::config::parse_config(
            "events: [focus-lost]\nensure_directories: false\nhooks:\n  save_pre: [\"true\"]\n",
            std::path::Path::new("inline"),
        )
        .unwrap();

        let ctl =
            AutosaveController::from_config(&config, MemoryStore::new(), EventRegistry::new())
                .unwrap();

        assert_eq!(ctl.trigger_events(), ["focus-lost"]);
        assert_eq!(ctl.hooks.phase(HookPhase::SavePre).len(), 1);
        assert!(!ctl.ensure_directories);
    }

    #[test]
    fn from_config_rejects_invalid_hook() {
        let mut config = SessionConfig::default();
        config.hooks.load_pre.push(serde_yaml::Value::Bool(true));

        let result =
            AutosaveController::from_config(&config, MemoryStore::new(), EventRegistry::new());

        assert!(matches!(result, Err(SessionError::InvalidHook { .. })));
    }

    #[test]
    fn save_without_ensure_leaves_directories_alone() {
        let temp = TempDir::new().unwrap();
        let mut ctl = controller("", "/").with_ensure_directories(false);

        let result = ctl.save(
            Some(&path_in(&temp, "missing/s1")),
            SaveOptions::default(),
            &mut MockUI::new(),
        );

        // missing parents are the store's problem
        assert!(result.is_ok());
        assert!(!temp.path().join("missing").exists());
    }
}
