use command_core::{
    Command, Context, Outcome, StaticMessageResolver, run_with_resolver,
};
use std::sync::Arc;

// 校验邮箱格式的子命令
struct ValidateEmail {
    email: String,
}

impl Command for ValidateEmail {
    type Output = String;
    const NAME: &'static str = "validate_email";
    const SCOPE: &'static str = "commands.validate_email";

    fn execute(&mut self, ctx: &mut Context) -> Outcome<String> {
        if !self.email.contains('@') {
            let params = [("value", self.email.as_str())];
            return ctx.abort_with("email", "invalid", "invalid_format", &params);
        }
        Ok(self.email.to_lowercase())
    }
}

// 注册用户的父命令:先校验邮箱,再落库(此处以打印代替)
struct RegisterUser {
    name: String,
    email: String,
}

impl Command for RegisterUser {
    type Output = String;
    const NAME: &'static str = "register_user";
    const SCOPE: &'static str = "commands.register_user";

    fn execute(&mut self, ctx: &mut Context) -> Outcome<String> {
        if self.name.trim().is_empty() {
            ctx.errors_mut().add("name", "blank", "name_blank");
        }
        ctx.assert()?;

        let email = ctx.assert_sub(ValidateEmail {
            email: self.email.clone(),
        })?;

        println!("registering {} <{}>", self.name, email);
        Ok(format!("user:{email}"))
    }
}

fn resolver() -> Arc<StaticMessageResolver> {
    Arc::new(
        StaticMessageResolver::new()
            .insert("commands.register_user", "name_blank", "name can not be blank")
            .insert(
                "commands.validate_email",
                "invalid_format",
                "%{value} is not a valid email address",
            ),
    )
}

fn main() {
    // 成功路径:子命令结果回流,父命令产出用户标识
    let ok = run_with_resolver(
        RegisterUser {
            name: "Sunny".to_string(),
            email: "Sunny@Example.com".to_string(),
        },
        resolver(),
    )
    .expect("register_user implements execute");
    println!(
        "success={} result={:?}",
        ok.success(),
        ok.result()
    );

    // 失败路径:子命令失败被父命令吸收,落库语句不执行
    let failed = run_with_resolver(
        RegisterUser {
            name: "Sunny".to_string(),
            email: "not-an-email".to_string(),
        },
        resolver(),
    )
    .expect("register_user implements execute");
    println!("failure={}", failed.failure());
    for (attribute, entries) in failed.errors().iter() {
        for entry in entries {
            println!("  {attribute}: [{}] {}", entry.code, entry.message);
        }
    }
}
