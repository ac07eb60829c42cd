use bind::{package, Interp};
use serde_json::Value as Json;
use std::error::Error as StdError;

package!(pub JSON = "json", "1.0", register);

fn register(interp: &mut Interp) -> Result<(), Box<dyn StdError + Send + Sync>> {
    let json = interp.create_command("json");

    json.add_subcommand("parse")
        .add_function(|text: String| serde_json::from_str::<Json>(&text));

    // Dicts and lists serialize structurally; plain words become JSON strings.
    json.add_subcommand("stringify")
        .add_function(|value: Json| serde_json::to_string(&value));

    json.add_subcommand("pretty").add_function(|text: String| {
        let value: Json = serde_json::from_str(&text)?;
        serde_json::to_string_pretty(&value)
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bind::{Code, Value};
    use memory::obj_type;

    fn json() -> Interp {
        let mut interp = Interp::new();
        interp.load_package(&JSON).unwrap();
        interp
    }

    #[test]
    fn parse_builds_typed_values() {
        let mut interp = json();
        let objv = [
            Value::string("json"),
            Value::string("parse"),
            Value::string(r#"{"a": [1, 2], "b": null}"#),
        ];
        assert_eq!(interp.eval_objv(&objv), Code::Ok);
        let result = interp.result().clone();
        assert!(result.has_type(&obj_type::DICT));
        let entries = result.get_dict().unwrap();
        assert_eq!(entries[0].0.as_str(), "a");
        assert!(entries[0].1.has_type(&obj_type::LIST));
        assert!(entries[1].1.has_type(&obj_type::NULL));
    }

    #[test]
    fn stringify_uses_the_structure() {
        let mut interp = json();
        let parsed = {
            let objv = [Value::string("json"), Value::string("parse"), Value::string("[1, true]")];
            interp.eval_objv(&objv);
            interp.result().clone()
        };
        let objv = [Value::string("json"), Value::string("stringify"), parsed];
        assert_eq!(interp.eval_objv(&objv), Code::Ok);
        assert_eq!(interp.result().as_str(), "[1,true]");

        interp.eval_words("json stringify hello");
        assert_eq!(interp.result().as_str(), "\"hello\"");
    }

    #[test]
    fn bad_json_is_an_error() {
        let mut interp = json();
        assert_eq!(interp.eval_words("json parse {[1,}"), Code::Error);
    }
}
