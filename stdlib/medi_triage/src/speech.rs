//! Best-effort spoken announcement of a result.

use std::process::{Command, Stdio};

use crate::advice::speech_line;
use crate::config::SpeechConfig;
use crate::error::{Result, TriageError};
use crate::risk::RiskResult;

pub trait Speaker {
    fn speak(&self, text: &str) -> Result<()>;
}

/// Does nothing; used when speech is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Runs an external text-to-speech program with the sentence as its last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpeaker {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| TriageError::Speech(format!("failed to spawn '{}': {e}", self.program)))?;
        if status.success() {
            Ok(())
        } else {
            Err(TriageError::Speech(format!(
                "'{}' exited with {status}",
                self.program
            )))
        }
    }
}

pub fn speaker_from_config(config: &SpeechConfig) -> Box<dyn Speaker> {
    if config.enabled {
        Box::new(CommandSpeaker {
            program: config.command.clone(),
            args: config.args.clone(),
        })
    } else {
        Box::new(SilentSpeaker)
    }
}

/// Speak the result. Failures are logged and swallowed; returns whether it was spoken.
pub fn announce(speaker: &dyn Speaker, result: &RiskResult) -> bool {
    let line = speech_line(result);
    match speaker.speak(&line) {
        Ok(()) => {
            log::info!("announced: {line}");
            true
        }
        Err(e) => {
            log::warn!("speech unavailable: {e}");
            false
        }
    }
}
