//! System TTS engine (speech-dispatcher or espeak-ng)

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug)]
pub struct SystemEngine;

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str, slow: bool) -> Result<()> {
        debug!("System speaking (slow={}): {}", slow, text);

        // spd-say returns immediately; wait so turns don't talk over each other
        let (spd_args, espeak_args): (&[&str], &[&str]) = if slow {
            (&["--wait", "--rate", "-50"], &["-s", "110"])
        } else {
            (&["--wait"], &[])
        };

        for (program, args) in [("spd-say", spd_args), ("espeak-ng", espeak_args)] {
            if let Ok(mut child) = Command::new(program).args(args).arg(text).spawn() {
                child.wait().await?;
                return Ok(());
            }
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried spd-say, espeak-ng)"
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
