use log::info;
use serde_json::json;
use setugid_core::Strategy;
use setugid_core::report::PrivilegeReport;
use std::error::Error;
use std::ffi::OsStr;
use std::io::Write;

pub fn check(out: &mut dyn Write, json: bool) -> Result<(), Box<dyn Error>> {
    info!("Collecting privilege report");
    let report = PrivilegeReport::collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", report.summary())?;
    }
    Ok(())
}

/// Exit status for `--quiet`: 0 when trusted, 1 when elevated
pub fn quiet_status() -> i32 {
    i32::from(setugid_core::is_privilege_elevated())
}

pub fn list_strategies(out: &mut dyn Write, json: bool) -> Result<(), Box<dyn Error>> {
    info!("Listing detection strategies");
    let active = Strategy::active();

    if json {
        let listing: Vec<_> = Strategy::all()
            .into_iter()
            .map(|strategy| {
                json!({
                    "name": strategy,
                    "description": strategy.description(),
                    "active": strategy == active,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    writeln!(out, "Detection strategies:\n")?;
    for strategy in Strategy::all() {
        let marker = if strategy == active { "*" } else { " " };
        writeln!(
            out,
            "{} {:26} - {}",
            marker,
            strategy.name(),
            strategy.description()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "* selected for this build")?;
    Ok(())
}

pub fn getenv(out: &mut dyn Write, name: &str, json: bool) -> Result<(), Box<dyn Error>> {
    info!("Looking up {}", name);

    let Some(value) = setugid_core::env::safe_var(name) else {
        setugid_core::env::require_trusted_environment()?;
        return Err(format!("{} is not set", name).into());
    };

    if json {
        let text = value
            .to_str()
            .ok_or_else(|| format!("{} is not valid UTF-8", name))?;
        writeln!(out, "{}", json!({ "name": name, "value": text }))?;
    } else {
        write_raw(out, &value)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(unix)]
fn write_raw(out: &mut dyn Write, value: &OsStr) -> std::io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(value.as_bytes())
}

#[cfg(not(unix))]
fn write_raw(out: &mut dyn Write, value: &OsStr) -> std::io::Result<()> {
    write!(out, "{}", value.to_string_lossy())
}
