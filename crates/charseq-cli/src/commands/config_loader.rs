use std::fs;
use std::io::{self, Read};
use std::path::Path;

use charseq_lib::{Callback, Colors, Config, Value, callback};

/// What a bound operation does when invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackMode {
    /// Print `name(args...)` to stdout.
    Print,
    /// Do nothing; the tracer reports the call.
    Silent,
}

pub fn load_config(path: &Path, mode: CallbackMode, colors: Colors) -> Result<Config, String> {
    let text = load_text(path)?;
    Config::from_json(&text, |name| Some(bind_operation(name, mode, colors)))
        .map_err(|e| format!("'{}': {}", path.display(), e))
}

fn load_text(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

/// Every operation name binds: the CLI has no host functions, so a named
/// operation just reports its call.
pub fn bind_operation(name: &str, mode: CallbackMode, colors: Colors) -> Callback {
    let name = name.to_owned();
    match mode {
        CallbackMode::Print => callback(move |args| println!("{}", format_call(&name, args, colors))),
        CallbackMode::Silent => callback(|_| {}),
    }
}

/// `name(arg, ...)` with JSON-formatted values and `-` for missing ones.
pub fn format_call(name: &str, args: &[Option<Value>], colors: Colors) -> String {
    let args: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Some(value) => value.format(colors),
            None => format!("{}-{}", colors.dim, colors.reset),
        })
        .collect();
    format!(
        "{}{}{}({})",
        colors.blue,
        name,
        colors.reset,
        args.join(", ")
    )
}
