//! 命令执行器(Runner)
//!
//! 以"恰好一次"的生命周期运行工作函数,把结局捕获为
//! 成功携带结果或失败携带错误集合;内部短路信号在 `call` 边界被消费,
//! 绝不外泄给调用者。
//!
use crate::command::Command;
use crate::context::Context;
use crate::error::{CommandError, CommandResult, Interrupt};
use crate::errors::Errors;
use crate::resolver::MessageResolver;
use std::sync::Arc;

/// 已执行命令的类型擦除只读视图
///
/// 子命令历史的元素类型:跨具体命令类型暴露名称、结局与错误集合。
pub trait Executed: Send {
    /// 命令的稳定名称
    fn name(&self) -> &'static str;

    fn called(&self) -> bool;

    fn success(&self) -> bool;

    fn failure(&self) -> bool;

    fn errors(&self) -> &Errors;

    fn is_sub_command(&self) -> bool;
}

/// 命令执行器
///
/// 持有命令值与其全部执行状态:`called` 标志、结果、
/// 错误集合与子命令历史。状态不跨实例共享。
pub struct Runner<C: Command> {
    command: C,
    called: bool,
    result: Option<C::Output>,
    ctx: Context,
    sub_command: bool,
}

impl<C: Command> Runner<C> {
    /// 包装一个尚未执行的命令
    pub fn new(command: C) -> Self {
        Self {
            command,
            called: false,
            result: None,
            ctx: Context::new(Errors::new(C::SCOPE)),
            sub_command: false,
        }
    }

    /// 配置消息解析器(链式)
    ///
    /// 未配置时,消息键直接以字面值充当消息。
    pub fn with_resolver(mut self, resolver: Arc<dyn MessageResolver>) -> Self {
        self.ctx.errors_mut().set_resolver(resolver);
        self
    }

    /// 标记为子命令(供 `assert_sub` 之外的显式嵌套构造使用)
    pub fn as_sub_command(mut self) -> Self {
        self.sub_command = true;
        self
    }

    /// 执行工作函数(恰好一次)
    ///
    /// - 同一实例第二次调用返回 [`CommandError::AlreadyCalled`];
    /// - 工作函数正常完成时记录其返回值为结果;
    /// - 内部短路信号在此被消费,结果保持缺省,调用者拿不到任何错误值;
    /// - 编程错误原样向外传播,不计入错误集合。
    ///
    /// 返回 `&mut Self` 以便链式读取结局。
    pub fn call(&mut self) -> CommandResult<&mut Self> {
        if self.called {
            return Err(CommandError::AlreadyCalled { command: C::NAME });
        }
        self.called = true;

        match self.command.execute(&mut self.ctx) {
            Ok(value) => {
                self.result = Some(value);
                Ok(self)
            }
            Err(Interrupt::Abort(_)) => Ok(self),
            Err(Interrupt::Fault(fault)) => Err(fault),
        }
    }

    pub fn called(&self) -> bool {
        self.called
    }

    /// 成功:已执行且未记录任何错误(派生谓词,读取不改状态)
    pub fn success(&self) -> bool {
        self.called && self.ctx.errors().is_empty()
    }

    /// 失败:已执行且记录了至少一条错误
    pub fn failure(&self) -> bool {
        self.called && !self.ctx.errors().is_empty()
    }

    /// 工作函数的返回值;未执行或被短路时为 `None`
    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }

    /// 取走结果(用于把子命令结果向父命令传递)
    pub fn take_result(&mut self) -> Option<C::Output> {
        self.result.take()
    }

    pub fn errors(&self) -> &Errors {
        self.ctx.errors()
    }

    /// 错误集合(可写,可在执行前预置错误)
    pub fn errors_mut(&mut self) -> &mut Errors {
        self.ctx.errors_mut()
    }

    /// 某属性下是否存在携带指定错误码的条目
    pub fn has_error(&self, attribute: &str, code: &str) -> bool {
        self.ctx.errors().contains(attribute, code)
    }

    /// 已执行的子命令历史,按调用顺序
    pub fn sub_commands(&self) -> &[Box<dyn Executed>] {
        self.ctx.sub_commands()
    }

    pub fn is_sub_command(&self) -> bool {
        self.sub_command
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn into_command(self) -> C {
        self.command
    }
}

impl<C: Command> Executed for Runner<C> {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn called(&self) -> bool {
        self.called
    }

    fn success(&self) -> bool {
        Runner::success(self)
    }

    fn failure(&self) -> bool {
        Runner::failure(self)
    }

    fn errors(&self) -> &Errors {
        self.ctx.errors()
    }

    fn is_sub_command(&self) -> bool {
        self.sub_command
    }
}

/// 构造并立即执行(类型级 `call` 语法糖,无额外语义)
pub fn run<C: Command>(command: C) -> CommandResult<Runner<C>> {
    let mut runner = Runner::new(command);
    runner.call()?;
    Ok(runner)
}

/// 携带消息解析器的 [`run`]
pub fn run_with_resolver<C: Command>(
    command: C,
    resolver: Arc<dyn MessageResolver>,
) -> CommandResult<Runner<C>> {
    let mut runner = Runner::new(command).with_resolver(resolver);
    runner.call()?;
    Ok(runner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Outcome;

    struct Double {
        input: i64,
    }

    impl Command for Double {
        type Output = i64;
        const NAME: &'static str = "double";

        fn execute(&mut self, _ctx: &mut Context) -> Outcome<i64> {
            Ok(self.input * 2)
        }
    }

    // 执行前两个谓词都为假,结果缺省
    #[test]
    fn test_fresh_runner_is_neither_success_nor_failure() {
        let runner = Runner::new(Double { input: 2 });

        assert!(!runner.called());
        assert!(!runner.success());
        assert!(!runner.failure());
        assert!(runner.result().is_none());
    }

    // 正常完成:成功,结果为工作函数返回值
    #[test]
    fn test_call_records_result() {
        let mut runner = Runner::new(Double { input: 2 });
        assert!(runner.call().is_ok());

        assert!(runner.called());
        assert!(runner.success());
        assert!(!runner.failure());
        assert_eq!(runner.result(), Some(&4));
        assert!(runner.errors().is_empty());
    }

    // 预置错误后执行:结果在,但结局为失败
    #[test]
    fn test_preexisting_errors_turn_call_into_failure() {
        let mut runner = Runner::new(Double { input: 2 });
        runner.errors_mut().add("base", "some_error", "some message");
        assert!(runner.call().is_ok());

        assert!(runner.failure());
        assert!(!runner.success());
        assert_eq!(runner.result(), Some(&4));
    }

    // 第二次 call 是使用错误
    #[test]
    fn test_second_call_is_a_usage_error() {
        let mut runner = Runner::new(Double { input: 2 });
        assert!(runner.call().is_ok());

        assert!(matches!(
            runner.call(),
            Err(CommandError::AlreadyCalled { command: "double" })
        ));
        // 第一次的结局不受影响
        assert!(runner.success());
        assert_eq!(runner.result(), Some(&4));
    }

    // has_error 委托给错误集合
    #[test]
    fn test_has_error() {
        let mut runner = Runner::new(Double { input: 2 });
        assert!(!runner.has_error("attribute", "some_error"));

        runner.errors_mut().add("attribute", "some_error", "some message");
        assert!(runner.has_error("attribute", "some_error"));
    }

    // as_sub_command 仅设置标记,不影响结构
    #[test]
    fn test_as_sub_command_marker() {
        let mut runner = Runner::new(Double { input: 2 }).as_sub_command();
        assert!(runner.is_sub_command());

        assert!(runner.call().is_ok());
        assert!(runner.success());
    }

    // run 等价于 new + call
    #[test]
    fn test_run_sugar() {
        let runner = run(Double { input: 21 }).unwrap();
        assert_eq!(runner.result(), Some(&42));
    }
}
