use serde::Serialize;

/// Return true if a key name likely holds a customer account/meter number.
fn is_account_key(key: &str) -> bool {
    let k = key.to_lowercase();
    matches!(k.as_str(), "customer" | "customer_number")
        || k.contains("account") && (k.contains("number") || k.contains("num"))
        || k.contains("meter")
}

/// Return true if a key name likely holds an email address.
fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

fn mask_number(value: &str) -> String {
    let len = value.len();
    if len > 4 {
        "*".repeat(len - 4) + &value[len - 4..]
    } else {
        value.to_string()
    }
}

fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) => {
            let head = local.chars().next().map(String::from).unwrap_or_default();
            format!("{head}***@{domain}")
        }
        None => "***".to_string(),
    }
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    let value = serde_json::to_value(v).expect("serialization is infallible");
    secure_value(&value)
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let is_account = is_account_key(k);
                let is_email = is_email_key(k);
                let new_val = match val {
                    Value::String(s) if is_account => Value::String(mask_number(s)),
                    Value::String(s) if is_email => Value::String(mask_email(s)),
                    Value::Number(n) if is_account => Value::String(mask_number(&n.to_string())),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        // primitives that are not objects: leave them as-is
        other => other.clone(),
    }
}
