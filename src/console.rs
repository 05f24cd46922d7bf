use crate::RealmError;
use crate::core::Value;

/// Render a value the way a console would print it. Strings at top level
/// stay bare; strings nested inside an object listing are quoted.
pub fn format_value<'gc>(val: &Value<'gc>) -> String {
    match val {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Boolean(b) => b.to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Function(name) => format!("function {}() {{ [native code] }}", name),
        Value::Object(obj) => {
            let mut s = String::from("{");
            let mut first = true;
            for (key, val_rc) in obj.borrow().properties.iter() {
                if !obj.borrow().is_enumerable(key) {
                    continue;
                }
                if !first {
                    s.push_str(", ");
                }
                first = false;
                s.push_str(key.as_ref());
                s.push_str(": ");
                match &*val_rc.borrow() {
                    Value::String(str_val) => {
                        // serde_json handles the quoting and escaping
                        match serde_json::to_string(str_val) {
                            Ok(quoted) => s.push_str(&quoted),
                            Err(_) => s.push_str(&format!("\"{}\"", str_val)),
                        }
                    }
                    Value::Object(_) => s.push_str("[object Object]"),
                    other => s.push_str(&format_value(other)),
                }
            }
            s.push('}');
            s
        }
    }
}

/// Write one rendered value and a newline, the model's only observable
/// side effect.
pub fn write_value<'gc, W: std::io::Write>(out: &mut W, val: &Value<'gc>) -> Result<(), RealmError> {
    writeln!(out, "{}", format_value(val))?;
    Ok(())
}
