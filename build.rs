use std::env;
use std::fs;

/// Settings read by `config.rs` through `option_env!`
const SETTINGS: [&str; 5] = [
    "ENVIRONMENT",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENABLE_LOGGING",
    "TOKEN_STORAGE_KEY",
];

const ENV_FILE: &str = ".env";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", ENV_FILE);
    for name in SETTINGS {
        println!("cargo:rerun-if-env-changed={}", name);
    }

    let Ok(contents) = fs::read_to_string(ENV_FILE) else {
        println!("cargo:warning=No {} file, using built-in settings (see .env.example)", ENV_FILE);
        return;
    };

    for (number, line) in contents.lines().enumerate() {
        let Some((name, value)) = setting(line) else {
            continue;
        };
        if !SETTINGS.contains(&name) {
            println!("cargo:warning={}:{}: unknown setting {}", ENV_FILE, number + 1, name);
            continue;
        }
        if let Some(problem) = check(name, value) {
            println!("cargo:warning={}:{}: {}", ENV_FILE, number + 1, problem);
        }
        // A variable set in the build environment overrides the file
        if env::var_os(name).is_none() {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }
}

/// `NAME=value`, `export NAME=value`, optionally quoted; blanks and comments yield None
fn setting(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (name, value) = line.split_once('=')?;
    Some((name.trim(), unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn check(name: &str, value: &str) -> Option<String> {
    match name {
        "ENVIRONMENT" if !matches!(value, "development" | "production") => Some(format!(
            "ENVIRONMENT={} is not production, the development backend will be used",
            value
        )),
        "ENABLE_LOGGING" if !matches!(value, "true" | "false") => {
            Some(format!("ENABLE_LOGGING={} is not true/false, logging stays on", value))
        }
        "BACKEND_URL_DEVELOPMENT" | "BACKEND_URL_PRODUCTION"
            if !(value.starts_with("http://") || value.starts_with("https://")) =>
        {
            Some(format!("{} should be an http(s) URL, got '{}'", name, value))
        }
        "TOKEN_STORAGE_KEY" if value.is_empty() => Some("TOKEN_STORAGE_KEY is empty".to_string()),
        _ => None,
    }
}
