//! Animation phase notifications and the audio cues bound to them.
//!
//! Frame geometry never looks at the phase; this module only routes phase
//! transitions published by the surrounding component framework.

use std::fmt;

use slotmap::SlotMap;
use tracing::debug;

slotmap::new_key_type! {
    /// Handle returned by [`PhaseBus::subscribe`].
    pub struct SubscriptionId;
}

/// Lifecycle phase of an animated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    Entering,
    Entered,
    Exiting,
    Exited,
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
            Self::Exited => "exited",
        };
        f.write_str(name)
    }
}

/// Audio collaborator that plays a named cue.
pub trait CuePlayer {
    fn play(&mut self, cue: &str);
}

/// Maps animation phases to audio cue names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueMap {
    cues: Vec<(AnimationPhase, String)>,
}

impl CueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues used by frames: `assemble` while entering and while exiting.
    #[must_use]
    pub fn frame_default() -> Self {
        Self::new()
            .with(AnimationPhase::Entering, "assemble")
            .with(AnimationPhase::Exiting, "assemble")
    }

    /// Binds `cue` to `phase`, replacing any previous binding.
    #[must_use]
    pub fn with(mut self, phase: AnimationPhase, cue: impl Into<String>) -> Self {
        self.cues.retain(|(p, _)| *p != phase);
        self.cues.push((phase, cue.into()));
        self
    }

    /// Returns the cue bound to `phase`.
    #[must_use]
    pub fn cue(&self, phase: AnimationPhase) -> Option<&str> {
        self.cues
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, cue)| cue.as_str())
    }

    /// Subscribes `player` to `bus` so each published phase plays its cue.
    pub fn attach<P: CuePlayer + 'static>(&self, bus: &mut PhaseBus, mut player: P) -> SubscriptionId {
        let cues = self.clone();
        bus.subscribe(move |phase| {
            if let Some(cue) = cues.cue(phase) {
                player.play(cue);
            }
        })
    }
}

type Subscriber = Box<dyn FnMut(AnimationPhase)>;

/// Publishes animation phase transitions to registered subscribers.
#[derive(Default)]
pub struct PhaseBus {
    subscribers: SlotMap<SubscriptionId, Subscriber>,
    phase: Option<AnimationPhase>,
}

impl PhaseBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and returns its handle.
    pub fn subscribe<F: FnMut(AnimationPhase) + 'static>(&mut self, subscriber: F) -> SubscriptionId {
        self.subscribers.insert(Box::new(subscriber))
    }

    /// Removes a subscriber. Returns `false` if the handle was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    /// Records `phase` as current and notifies every subscriber.
    pub fn publish(&mut self, phase: AnimationPhase) {
        debug!(%phase, subscribers = self.subscribers.len(), "publishing animation phase");
        self.phase = Some(phase);
        for subscriber in self.subscribers.values_mut() {
            subscriber(phase);
        }
    }

    /// The most recently published phase.
    #[must_use]
    pub fn phase(&self) -> Option<AnimationPhase> {
        self.phase
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for PhaseBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseBus")
            .field("subscribers", &self.subscribers.len())
            .field("phase", &self.phase)
            .finish()
    }
}
