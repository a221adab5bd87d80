//! 一次性命令基础库(command-core)
//!
//! 以"恰好一次"的生命周期组织一个工作单元:领域失败被收集为可查询的
//! 结构化集合而非以异常抛出,并支持由子命令组合而成——子命令失败时
//! 自动短路父命令并把错误向上合并。
//!
//! 核心构件:
//! - 命令抽象(`command`):实现 `execute` 即成为命令;
//! - 执行器(`runner`):call-once 生命周期与成功/失败派生;
//! - 错误集合(`errors`):按属性分组、保序去重、可本地化;
//! - 执行上下文(`context`):`abort`/`assert` 短路原语与 `assert_sub` 组合协议;
//! - 协作者接口:消息解析(`resolver`)与记录式错误来源(`record`)。
//!
//! 典型用法:
//! 1. 为类型实现 [`Command`](command::Command) 并编写 `execute`;
//! 2. 通过 [`run`](runner::run) 或 [`Runner::call`](runner::Runner::call) 执行;
//! 3. 在返回的执行器上读取 `success()`/`result()`/`errors()`;
//! 4. 在工作函数内用 `ctx.assert_sub(..)` 组合依赖步骤。
//!
pub mod command;
pub mod context;
pub mod error;
pub mod errors;
pub mod record;
pub mod resolver;
pub mod runner;

pub use command::{Command, DEFAULT_SCOPE};
pub use context::Context;
pub use error::{Abort, CommandError, CommandResult, Interrupt, Outcome};
pub use errors::{ErrorEntry, Errors};
pub use record::RecordErrors;
pub use resolver::{MessageResolver, StaticMessageResolver};
pub use runner::{Executed, Runner, run, run_with_resolver};
