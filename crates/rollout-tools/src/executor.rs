use crate::tool::{Tool, ToolError};

/// Abstraction over docker / kubectl CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command and capture stdout.
    async fn exec(&self, tool: Tool, args: &[String]) -> Result<String, ToolError>;

    /// Execute a command, streaming its output to the terminal.
    async fn exec_streaming(&self, tool: Tool, args: &[String]) -> Result<(), ToolError>;
}

/// Runs the real CLIs found on `PATH`.
pub struct RealExecutor;

impl CommandExecutor for RealExecutor {
    async fn exec(&self, tool: Tool, args: &[String]) -> Result<String, ToolError> {
        use std::process::Stdio;

        tracing::debug!(command = %crate::tool::render_command(tool, args), "exec");

        let output = tokio::process::Command::new(tool.program())
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ToolError::NotFound { tool, source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| ToolError::InvalidUtf8 { tool, source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            Err(ToolError::CommandFailed {
                tool,
                args: args.to_vec(),
                stderr,
            })
        }
    }

    async fn exec_streaming(&self, tool: Tool, args: &[String]) -> Result<(), ToolError> {
        use std::process::Stdio;

        tracing::debug!(command = %crate::tool::render_command(tool, args), "exec (streaming)");

        let status = tokio::process::Command::new(tool.program())
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ToolError::NotFound { tool, source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::CommandFailed {
                tool,
                args: args.to_vec(),
                stderr: format!("exit code: {status}"),
            })
        }
    }
}
