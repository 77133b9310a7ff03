//! `sx run`: one script execution against a synthetic request.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sx_eval::RunOutcome;
use sx_host::{handler_fn, Config, ConfigError, Request, Response, ScriptMiddleware};

use super::read_file;

/// Parsed `sx run` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub file: String,
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// Parse the arguments following `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut file = None;
    let mut method = "GET".to_owned();
    let mut path = "/".to_owned();
    let mut headers = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--path" | "--method" | "--header" => {
                let Some(value) = iter.next() else {
                    return Err(format!("{arg} needs a value"));
                };
                match arg.as_str() {
                    "--path" => path.clone_from(value),
                    "--method" => method = value.to_ascii_uppercase(),
                    _ => headers.push(split_header(value)?),
                }
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ if file.is_none() => file = Some(arg.clone()),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
    }

    let file = file.ok_or_else(|| "missing file path".to_owned())?;
    Ok(RunOptions {
        file,
        method,
        path,
        headers,
    })
}

fn split_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.trim().to_owned()))
        }
        _ => Err(format!("header '{raw}' is not Name:Value")),
    }
}

/// `.toml` files are middleware config; anything else is the script itself.
fn load_config(file: &str, content: String) -> Result<Config, ConfigError> {
    let is_toml = Path::new(file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        Config::from_toml_str(&content)
    } else {
        Ok(Config::with_code(content))
    }
}

pub fn run_file(options: &RunOptions) {
    let content = read_file(&options.file);
    let config = match load_config(&options.file, content) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {err}", options.file);
            std::process::exit(1);
        }
    };

    let downstream_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&downstream_calls);
    let next = Arc::new(handler_fn(move |_req: &mut Request, rw: &mut Response| {
        counter.fetch_add(1, Ordering::Relaxed);
        rw.write_status(200);
        rw.write_body("OK\n");
    }));
    let middleware = ScriptMiddleware::new(next, &config, &options.file);

    let mut req = Request::new(&options.method, &options.path);
    for (name, value) in &options.headers {
        req.headers.add(name, value);
    }
    let mut rw = Response::new();

    let outcome = middleware.execute(&mut req, &mut rw);

    match &outcome {
        None => println!("Script: (empty, forwarded)"),
        Some(RunOutcome::Completed(value)) => println!("Script: completed with {value}"),
        Some(RunOutcome::Aborted(err)) => println!("Script: aborted, {err}"),
    }
    println!(
        "Downstream: called {} time(s)",
        downstream_calls.load(Ordering::Relaxed)
    );
    println!();
    println!("Request: {} {}", req.method, req.path);
    print!("{}", req.headers);
    println!();
    match rw.status() {
        Some(status) => println!("Response: {status}"),
        None => println!("Response: (nothing written)"),
    }
    print!("{}", rw.headers);
    if !rw.body().is_empty() {
        println!();
        print!("{}", rw.body());
    }
}
