//! 执行上下文(Context)
//!
//! 工作函数可见的命令状态:错误集合、短路原语(`abort`/`assert`)
//! 与子命令组合协议(`assert_sub`)。
//!
use crate::command::Command;
use crate::error::{Abort, Interrupt, Outcome};
use crate::errors::Errors;
use crate::runner::{Executed, Runner};

/// 一次命令执行的上下文
///
/// 归执行器独占,在 `call` 期间以可变借用交给工作函数。
pub struct Context {
    errors: Errors,
    sub_commands: Vec<Box<dyn Executed>>,
}

impl Context {
    pub(crate) fn new(errors: Errors) -> Self {
        Self {
            errors,
            sub_commands: Vec::new(),
        }
    }

    /// 错误集合(只读)
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// 错误集合(可写,用于直接记录领域错误)
    pub fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    /// 已执行的子命令历史,按调用顺序
    pub fn sub_commands(&self) -> &[Box<dyn Executed>] {
        &self.sub_commands
    }

    /// 记录一条错误并立即短路
    ///
    /// 返回值恒为 `Err`,以便工作函数写作 `return ctx.abort(..)`;
    /// 在语句中间使用时以 turbofish 固定结果类型:`ctx.abort::<()>(..)?`。
    pub fn abort<T>(&mut self, attribute: &str, code: &str, message_or_key: &str) -> Outcome<T> {
        self.errors.add(attribute, code, message_or_key);
        Err(Interrupt::Abort(Abort::new()))
    }

    /// 带插值参数的 [`abort`](Self::abort)
    pub fn abort_with<T>(
        &mut self,
        attribute: &str,
        code: &str,
        message_or_key: &str,
        params: &[(&str, &str)],
    ) -> Outcome<T> {
        self.errors.add_with(attribute, code, message_or_key, params);
        Err(Interrupt::Abort(Abort::new()))
    }

    /// 错误集合非空时短路,否则继续
    ///
    /// 配合 `errors_mut().add(..)` 先收集、后统一检查的写法使用。
    pub fn assert(&mut self) -> Outcome<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Interrupt::Abort(Abort::new()))
        }
    }

    /// 运行子命令并吸收其失败("全有或全无"组合)
    ///
    /// - 子命令被标记为 sub-command 并继承父命令的消息解析器;
    /// - 无论成败,子命令实例都计入 [`sub_commands`](Self::sub_commands) 历史;
    /// - 成功时返回子命令结果,父工作函数继续执行;
    /// - 失败时其全部错误并入父集合,随后短路父命令,
    ///   `assert_sub` 之后的语句不再执行;
    /// - 子命令的编程错误原样向外传播。
    pub fn assert_sub<S: Command>(&mut self, command: S) -> Outcome<S::Output> {
        let mut runner = Runner::new(command).as_sub_command();
        if let Some(resolver) = self.errors.resolver() {
            runner = runner.with_resolver(resolver);
        }

        if let Err(fault) = runner.call() {
            return Err(Interrupt::Fault(fault));
        }

        let output = runner.take_result();
        let failed = runner.failure();
        if failed {
            self.errors.merge_from(runner.errors());
        }
        self.sub_commands.push(Box::new(runner));

        match output {
            Some(value) if !failed => Ok(value),
            _ => Err(Interrupt::Abort(Abort::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context::new(Errors::default())
    }

    // abort 记录错误并返回中断信号
    #[test]
    fn test_abort_records_and_interrupts() {
        let mut ctx = context();
        let outcome: Outcome<()> = ctx.abort("base", "some_error", "Error message");

        assert!(matches!(outcome, Err(Interrupt::Abort(_))));
        assert!(ctx.errors().contains("base", "some_error"));
    }

    // 集合为空时 assert 放行
    #[test]
    fn test_assert_passes_without_errors() {
        let mut ctx = context();
        assert!(ctx.assert().is_ok());
    }

    // 集合非空时 assert 短路
    #[test]
    fn test_assert_interrupts_with_errors() {
        let mut ctx = context();
        ctx.errors_mut().add("base", "error1", "first");

        assert!(matches!(ctx.assert(), Err(Interrupt::Abort(_))));
    }
}
