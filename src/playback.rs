//! Audio control state for the page's play buttons.
//!
//! At most one episode plays at a time. The session is an explicit value
//! moved into [`apply`] and moved back out, so ownership of "what is
//! playing" always sits with the page component driving the audio element,
//! not with an ambient global.

/// The one currently playing episode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaybackSession {
    pub episode_id: String,
    pub audio_url: String,
    pub paused: bool,
}

/// Command sent by page controls to the audio component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayerCommand {
    /// Play an episode. Playing the episode that already owns the session
    /// toggles pause instead of restarting it.
    Play {
        episode_id: String,
        audio_url: String,
    },
    /// Toggle pause on the current session.
    TogglePause,
    /// Stop playback and discard the session.
    Stop,
    /// The audio element reported the track finished.
    Ended,
}

/// Action the embedding audio element must perform after a command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlaybackEffect {
    /// Load and play a new source URL (replacing any current one).
    Start(String),
    Pause,
    Resume,
    /// Stop and unload the current source.
    Stop,
    None,
}

/// Applies one command to the session, returning the next session and the
/// effect the audio element should carry out.
pub fn apply(
    session: Option<PlaybackSession>,
    command: PlayerCommand,
) -> (Option<PlaybackSession>, PlaybackEffect) {
    match command {
        PlayerCommand::Play {
            episode_id,
            audio_url,
        } => match session {
            Some(mut current) if current.episode_id == episode_id => {
                current.paused = !current.paused;
                let effect = if current.paused {
                    PlaybackEffect::Pause
                } else {
                    PlaybackEffect::Resume
                };
                (Some(current), effect)
            }
            _ => {
                let next = PlaybackSession {
                    episode_id,
                    audio_url: audio_url.clone(),
                    paused: false,
                };
                (Some(next), PlaybackEffect::Start(audio_url))
            }
        },
        PlayerCommand::TogglePause => match session {
            Some(mut current) => {
                current.paused = !current.paused;
                let effect = if current.paused {
                    PlaybackEffect::Pause
                } else {
                    PlaybackEffect::Resume
                };
                (Some(current), effect)
            }
            None => (None, PlaybackEffect::None),
        },
        PlayerCommand::Stop => match session {
            Some(_) => (None, PlaybackEffect::Stop),
            None => (None, PlaybackEffect::None),
        },
        PlayerCommand::Ended => (None, PlaybackEffect::None),
    }
}
