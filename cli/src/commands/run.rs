use anyhow::{anyhow, Context, Result};
use bind::{Code, Interp, Value};
use std::fs;
use std::path::Path;

/// Print a successful result, or turn the error into a failure.
pub fn report(interp: &Interp, code: Code) -> Result<()> {
    match code {
        Code::Ok => {
            let result = interp.result();
            if !result.as_str().is_empty() {
                println!("{result}");
            }
            Ok(())
        }
        Code::Error => Err(anyhow!("Error: {}", interp.result())),
    }
}

/// Run one command given as separate words; no list parsing happens.
pub fn run_words(interp: &mut Interp, words: &[String]) -> Result<()> {
    let objv: Vec<Value> = words.iter().map(|w| Value::string(w.as_str())).collect();
    let code = interp.eval_objv(&objv);
    report(interp, code)
}

pub fn source_file(interp: &mut Interp, path: &Path) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let code = interp.eval(&script);
    report(interp, code)
}
