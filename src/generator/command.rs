use std::{io, process::Command};

use super::{Job, Rasterizer};
use crate::error::{Error, Result};

pub const DEFAULT_COMMAND: &str = "rsvg-convert";

/// Shells out to an `rsvg-convert` compatible program:
/// `<program> -w <size> -h <size> -o <output> <source>`.
#[derive(Debug, Clone)]
pub struct CommandRasterizer {
    program: String,
}

impl CommandRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        CommandRasterizer {
            program: program.into(),
        }
    }

    fn command(&self, job: &Job<'_>) -> Command {
        let size = job.size.to_string();
        let mut command = Command::new(&self.program);
        command
            .arg("-w")
            .arg(&size)
            .arg("-h")
            .arg(&size)
            .arg("-o")
            .arg(job.output)
            .arg(job.source);
        command
    }
}

impl Default for CommandRasterizer {
    fn default() -> Self {
        CommandRasterizer::new(DEFAULT_COMMAND)
    }
}

impl Rasterizer for CommandRasterizer {
    fn name(&self) -> &str {
        &self.program
    }

    fn rasterize(&self, job: &Job<'_>) -> Result<()> {
        let status = match self.command(job).status() {
            Ok(status) => status,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ToolNotFound {
                    program: self.program.clone(),
                });
            }
            Err(err) => {
                return Err(Error::Rasterize {
                    name: job.name.to_string(),
                    strategy: self.program.clone(),
                    reason: format!("failed to spawn: {err}"),
                });
            }
        };

        if !status.success() {
            return Err(Error::Rasterize {
                name: job.name.to_string(),
                strategy: self.program.clone(),
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}
