//! Mode dispatch for the `tweet` command
//!
//! With no arguments the interactive composer runs and its message, if any,
//! is sent. With arguments the words are joined into the message directly.
//! Every outcome is reported on `output` and returns normally. Only I/O
//! failures on the terminal itself are returned as errors.
//!
//! The platform is built through a factory that is called only once there is
//! a message to send, so aborted or empty sessions never touch the client.

use std::io::{BufRead, Write};

use crate::composer::{ComposeOutcome, Composer};
use crate::error::Result;
use crate::message::Message;
use crate::platforms::Platform;
use crate::poster;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Direct(Vec<String>),
}

impl Mode {
    pub fn from_args(args: Vec<String>) -> Self {
        if args.is_empty() {
            Mode::Interactive
        } else {
            Mode::Direct(args)
        }
    }
}

pub async fn run<R, W, P, F>(mode: Mode, input: R, output: W, make_platform: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Platform,
    F: FnOnce() -> P,
{
    match mode {
        Mode::Interactive => run_interactive(input, output, make_platform).await,
        Mode::Direct(args) => run_direct(&args, output, make_platform).await,
    }
}

pub async fn run_interactive<R, W, P, F>(input: R, mut output: W, make_platform: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Platform,
    F: FnOnce() -> P,
{
    match Composer::new().run(input, &mut output)? {
        ComposeOutcome::Finished(message) => {
            send_and_report(&make_platform(), &message, &mut output).await
        }
        ComposeOutcome::Aborted(_) => Ok(()),
    }
}

pub async fn run_direct<W, P, F>(args: &[String], mut output: W, make_platform: F) -> Result<()>
where
    W: Write,
    P: Platform,
    F: FnOnce() -> P,
{
    let message = match Message::from_args(args) {
        Ok(message) => message,
        Err(_) => {
            writeln!(output, "Error: No text provided.")?;
            writeln!(output, "Usage: tweet \"Hello World\"")?;
            return Ok(());
        }
    };

    send_and_report(&make_platform(), &message, &mut output).await
}

async fn send_and_report<W: Write>(
    platform: &dyn Platform,
    message: &Message,
    output: &mut W,
) -> Result<()> {
    match poster::send(platform, message).await {
        Ok(post_id) => writeln!(output, "✅ Tweet sent! ID: {}", post_id)?,
        Err(e) if e.is_send_failure() => writeln!(output, "❌ Error: {}", e)?,
        Err(e) => return Err(e),
    }
    Ok(())
}
