//! 命令(Command)
//!
//! 一次性执行的工作单元抽象:实现方只需提供 `execute`,
//! 即可获得 call-once 生命周期、结构化错误通道与子命令组合能力。
//!
use crate::context::Context;
use crate::error::{CommandError, Interrupt, Outcome};

/// 默认消息本地化作用域
pub const DEFAULT_SCOPE: &str = "errors.messages";

/// 命令:一个自包含的工作单元
///
/// 关联常量:
/// - `NAME`:命令的稳定名称,用于错误与子命令历史。避免依赖 `type_name::<T>()`。
/// - `SCOPE`:消息本地化作用域,按命令类型配置,只读,默认 [`DEFAULT_SCOPE`]。
///
/// # 示例
///
/// ```
/// use command_core::command::Command;
/// use command_core::context::Context;
/// use command_core::error::Outcome;
/// use command_core::runner::run;
///
/// struct Double {
///     input: i64,
/// }
///
/// impl Command for Double {
///     type Output = i64;
///     const NAME: &'static str = "double";
///
///     fn execute(&mut self, _ctx: &mut Context) -> Outcome<i64> {
///         Ok(self.input * 2)
///     }
/// }
///
/// let runner = run(Double { input: 2 }).unwrap();
/// assert!(runner.success());
/// assert_eq!(runner.result(), Some(&4));
/// ```
pub trait Command: Send + Sync + 'static {
    /// 执行成功时产出的结果类型
    type Output: Send + 'static;

    /// 命令的稳定名称(建议常量字符串,不随重构变化)
    const NAME: &'static str;

    /// 消息本地化作用域
    const SCOPE: &'static str = DEFAULT_SCOPE;

    /// 工作函数
    ///
    /// 领域失败通过 `ctx` 记录并以 `?` 短路;正常完成的返回值即命令结果。
    /// 默认实现返回 [`CommandError::NotImplemented`]:
    /// 未覆盖该方法属于编程错误,从 `call` 原样向外传播。
    fn execute(&mut self, ctx: &mut Context) -> Outcome<Self::Output> {
        let _ = ctx;
        Err(Interrupt::Fault(CommandError::NotImplemented {
            command: Self::NAME,
        }))
    }
}
