use anyhow::{bail, Result};
use ngop_store::{authenticate, session, AuthError, Email, NewRegistration, RegisterError};

use crate::commands::CommandContext;

pub fn login(ctx: &CommandContext, email: &str) -> Result<()> {
    let email = match Email::parse(email) {
        Ok(email) => email,
        Err(e) => bail!("{e}"),
    };
    let password = rpassword::prompt_password("รหัสผ่าน: ")?;
    if password.is_empty() {
        bail!("กรุณากรอกอีเมลและรหัสผ่าน");
    }

    match authenticate(&ctx.registry, email.as_str(), &password) {
        Ok(user) => {
            session::save_session(ctx.session_path(), &user)?;
            println!("ยินดีต้อนรับ: {}", user.work_group);
            Ok(())
        }
        Err(AuthError::InvalidCredentials) => {
            bail!("อีเมลหรือรหัสผ่านไม่ถูกต้อง กรุณาตรวจสอบข้อมูลอีกครั้ง")
        }
    }
}

pub fn logout(ctx: &CommandContext) -> Result<()> {
    session::clear_session(ctx.session_path())?;
    println!("logged out");
    Ok(())
}

pub fn whoami(ctx: &CommandContext) -> Result<()> {
    match ctx.current_user()? {
        Some(user) => {
            println!("{}", user.work_group);
            println!("กลุ่มภารกิจ: {}", user.mission_group);
            if let Some(organization) = &user.organization_name {
                println!("หน่วยงาน: {organization}");
            }
            println!("role: {}", user.effective_role());
        }
        None => println!("not logged in"),
    }
    Ok(())
}

pub fn register(
    ctx: &CommandContext,
    email: &str,
    organization: &str,
    work_group: &str,
    admin: bool,
) -> Result<()> {
    let email = match Email::parse(email) {
        Ok(email) => email,
        Err(e) => bail!("{e}"),
    };
    if organization.trim().is_empty() || work_group.trim().is_empty() {
        bail!("กรุณากรอกข้อมูลให้ครบถ้วนทุกช่อง");
    }

    let password = rpassword::prompt_password("รหัสผ่าน: ")?;
    if password.is_empty() {
        bail!("กรุณากรอกข้อมูลให้ครบถ้วนทุกช่อง");
    }
    let confirm = rpassword::prompt_password("ยืนยันรหัสผ่าน: ")?;
    if password != confirm {
        bail!("รหัสผ่านและการยืนยันรหัสผ่านไม่ตรงกัน กรุณาลองใหม่อีกครั้ง");
    }

    let registration = NewRegistration {
        email,
        password,
        organization_name: organization.trim().to_string(),
        work_group: work_group.trim().to_string(),
        admin,
    };
    match ctx.registry.register(registration) {
        Ok(_) => {
            println!("ทำการสมัครสมาชิกเรียบร้อยแล้ว");
            Ok(())
        }
        Err(RegisterError::DuplicateEmail(_)) => bail!("อีเมลนี้ถูกใช้งานแล้ว"),
        Err(e) => Err(e.into()),
    }
}
