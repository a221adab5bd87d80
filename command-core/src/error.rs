//! 命令层统一错误定义
//!
//! 区分两类互不相交的失败:编程错误(`CommandError`,从 `call` 原样向外传播)
//! 与领域错误(记录在 [`Errors`](crate::errors::Errors) 中,从不以错误抛出)。
//! 另有仅限内部构造的中断信号 [`Abort`],用于在工作函数内部短路执行。
//!
use thiserror::Error;

/// 编程错误(使用缺陷,而非业务规则失败)
///
/// 该类错误从 [`Runner::call`](crate::runner::Runner::call) 原样向外传播,
/// 绝不会被收入错误集合。
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    /// 命令类型未提供工作函数(未覆盖默认的 `execute`)
    #[error("execute not implemented: command={command}")]
    NotImplemented { command: &'static str },

    /// 同一实例重复调用 `call`(命令实例仅可执行一次)
    #[error("command already called: command={command}")]
    AlreadyCalled { command: &'static str },
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;

/// 内部中断信号
///
/// 只能由 [`Context::abort`](crate::context::Context::abort)、
/// [`Context::assert`](crate::context::Context::assert) 与
/// [`Context::assert_sub`](crate::context::Context::assert_sub) 构造,
/// 并且只会在最近的 `call` 边界被消费。不携带任何负载:
/// 它所指向的错误在信号产生之前已经记录完毕。
#[derive(Debug)]
pub struct Abort {
    _private: (),
}

impl Abort {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// 工作函数的提前返回通道
#[derive(Debug)]
pub enum Interrupt {
    /// 短路信号:立即停止工作函数,命令进入失败态
    Abort(Abort),
    /// 编程错误:原样传播给 `call` 的调用者
    Fault(CommandError),
}

impl From<Abort> for Interrupt {
    fn from(signal: Abort) -> Self {
        Interrupt::Abort(signal)
    }
}

impl From<CommandError> for Interrupt {
    fn from(fault: CommandError) -> Self {
        Interrupt::Fault(fault)
    }
}

/// 工作函数的返回类型
pub type Outcome<T> = Result<T, Interrupt>;
