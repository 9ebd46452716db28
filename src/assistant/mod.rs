//! External assistant invocation.
//!
//! The assistant is any CLI program that accepts a prompt argument, e.g.
//! `claude -p "<prompt>"`. It is run as a blocking subprocess with its
//! working directory pinned to the project root. Output is captured rather
//! than streamed so the workflow can parse it afterwards.

mod invoker;

pub use invoker::{AssistantInvoker, AssistantOutput, Phase, build_command_line};
