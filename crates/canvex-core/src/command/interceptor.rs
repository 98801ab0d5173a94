//! Command interception
//!
//! Features observe commands through lifecycle events fired by the command
//! stack, one per phase and command: `commandStack.<command>.<phase>`.

use crate::bus::{Event, EventBus, ListenerId, DEFAULT_PRIORITY};
use crate::editor::Editor;
use crate::errors::Result;

/// Lifecycle phase of a command that hooks can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    /// Precondition check; hooks may reject
    CanExecute,
    /// Before the primary handler; hooks may mutate the context or reject
    PreExecute,
    /// After the primary handler, on commit and on rejection
    PostExecute,
    /// After a committed execution only
    PostExecuted,
}

impl HookPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookPhase::CanExecute => "canExecute",
            HookPhase::PreExecute => "preExecute",
            HookPhase::PostExecute => "postExecute",
            HookPhase::PostExecuted => "postExecuted",
        }
    }

    /// Bus event name for this phase of `command`
    pub fn event_name(&self, command: &str) -> String {
        format!("commandStack.{}.{}", command, self.as_str())
    }
}

/// Registration of hooks around named commands
///
/// A hook registered for several commands is shared between them. Higher
/// priorities run first; equal priorities run in registration order.
pub trait CommandInterceptor {
    fn intercept<F>(
        &mut self,
        phase: HookPhase,
        commands: &[&str],
        priority: i32,
        hook: F,
    ) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static;

    fn can_execute<F>(&mut self, commands: &[&str], hook: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::CanExecute, commands, DEFAULT_PRIORITY, hook)
    }

    fn before<F>(&mut self, commands: &[&str], hook: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::PreExecute, commands, DEFAULT_PRIORITY, hook)
    }

    fn before_with_priority<F>(&mut self, commands: &[&str], priority: i32, hook: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::PreExecute, commands, priority, hook)
    }

    /// Runs on commit and on rejection; check `event.outcome`
    fn after<F>(&mut self, commands: &[&str], hook: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::PostExecute, commands, DEFAULT_PRIORITY, hook)
    }

    fn after_with_priority<F>(&mut self, commands: &[&str], priority: i32, hook: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::PostExecute, commands, priority, hook)
    }

    /// Runs only after a committed execution
    fn post_executed<F>(&mut self, commands: &[&str], hook: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::PostExecuted, commands, DEFAULT_PRIORITY, hook)
    }

    fn post_executed_with_priority<F>(
        &mut self,
        commands: &[&str],
        priority: i32,
        hook: F,
    ) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        self.intercept(HookPhase::PostExecuted, commands, priority, hook)
    }
}

impl CommandInterceptor for EventBus {
    fn intercept<F>(
        &mut self,
        phase: HookPhase,
        commands: &[&str],
        priority: i32,
        hook: F,
    ) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        let names: Vec<String> = commands.iter().map(|c| phase.event_name(c)).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        self.on(&names, priority, hook)
    }
}
