use serde_json;
use serde_json::{Map, Value};

use std::fs::File;
use std::io::Read;

use generators::Date;
use schema::{Field, FieldGenerator, Schema};

/// load_schema_from_file takes a filename as input, then parses the
/// contents according to the synthtab schema format.
///
/// # Examples
///
/// let result = load_schema_from_file("schemas/survey.json");
///
pub fn load_schema_from_file(file_name: &str) -> Result<Schema, String> {
    let mut raw_json = String::new();

    File::open(file_name)
        .map_err(|err| err.to_string())
        .and_then(|mut file| {
            file.read_to_string(&mut raw_json)
                .map_err(|err| err.to_string())
        })
        .and_then(|_| parse_schema_json(&raw_json))
}

/// Parses a schema from a JSON string. The root object must carry a
/// `table_name` and an array of `fields`; each field names one of the
/// generator kinds and its parameters.
pub fn parse_schema_json(raw_json: &str) -> Result<Schema, String> {
    let parsed: Value = serde_json::from_str(raw_json)
        .map_err(|err| err.to_string())?;
    let root = parsed.as_object()
        .ok_or("Root JSON value must be an object.".to_string())?;

    let table_name = root.get("table_name")
        .ok_or("Table name must be specified!".to_string())?
        .as_str()
        .ok_or("Table name must be a string!".to_string())?;

    let fields = root.get("fields")
        .ok_or("Fields must be provided!".to_string())?
        .as_array()
        .ok_or("Fields must be an array.".to_string())?;

    let mut schema = Schema {
        table_name: table_name.to_string(),
        fields: Vec::new()
    };

    for field in fields.iter() {
        let object = field.as_object()
            .ok_or("Each field must be an object.".to_string())?;
        schema.add_field(parse_field(object)?);
    }

    Ok(schema)
}

fn parse_field(object: &Map<String, Value>) -> Result<Field, String> {
    let name = string_entry(object, "name", "Field name is required.")?;
    let kind = string_entry(object, "generator", "Generator is required.")?;

    let generator = match kind {
        "sequence" => parse_sequence(object)?,
        "integer" => parse_integer(object)?,
        "real" => parse_real(object)?,
        "choice" => parse_choice(object)?,
        "date_sequence" => parse_date_sequence(object)?,
        "derived" => parse_derived(object, name)?,
        unknown => return Err(format!("Unknown generator type: {}", unknown))
    };

    Ok(Field {
        name: name.to_string(),
        generator: generator
    })
}

fn parse_sequence(object: &Map<String, Value>) -> Result<FieldGenerator, String> {
    let start = match object.get("start") {
        Some(value) => value.as_i64()
            .ok_or("'start' of a sequence field must be an integer!".to_string())?,
        None => 1
    };
    Ok(FieldGenerator::Sequence { start: start })
}

fn parse_integer(object: &Map<String, Value>) -> Result<FieldGenerator, String> {
    let min = integer_entry(object, "min", "an integer")?;
    let max = integer_entry(object, "max", "an integer")?;
    if min >= max {
        return Err(format!("An integer field needs min < max, got {} and {}.", min, max));
    }
    Ok(FieldGenerator::Integer { min: min, max: max })
}

fn parse_real(object: &Map<String, Value>) -> Result<FieldGenerator, String> {
    let min = number_entry(object, "min", "a real")?;
    let max = number_entry(object, "max", "a real")?;
    if min >= max {
        return Err(format!("A real field needs min < max, got {} and {}.", min, max));
    }
    let decimals = match object.get("decimals") {
        Some(value) => value.as_u64()
            .ok_or("'decimals' must be a non-negative integer!".to_string())? as usize,
        None => 1
    };
    Ok(FieldGenerator::Real { min: min, max: max, decimals: decimals })
}

fn parse_choice(object: &Map<String, Value>) -> Result<FieldGenerator, String> {
    let values = object.get("choices")
        .ok_or("A choice field must have choices!".to_string())?
        .as_array()
        .ok_or("Choices must be an array!".to_string())?;

    let mut choices = Vec::with_capacity(values.len());
    for choice in values.iter() {
        match choice.as_str() {
            Some(label) => choices.push(label.to_string()),
            None => return Err("All choices must be strings.".to_string())
        }
    }
    if choices.is_empty() {
        return Err("A choice field needs at least one choice.".to_string());
    }
    Ok(FieldGenerator::Choice { choices: choices })
}

fn parse_date_sequence(object: &Map<String, Value>) -> Result<FieldGenerator, String> {
    let start = object.get("start")
        .ok_or("A date_sequence field must have a start date!".to_string())?
        .as_str()
        .ok_or("'start' must be a DD.MM.YYYY string!".to_string())?;
    Ok(FieldGenerator::DateSequence { start: Date::parse(start)? })
}

fn parse_derived(object: &Map<String, Value>, field_name: &str)
        -> Result<FieldGenerator, String> {
    let source = string_entry(object, "source",
        "A derived field must name its source field.")?;
    let offset = optional_number_entry(object, "offset", 0.0)?;
    let divisor = optional_number_entry(object, "divisor", 1.0)?;
    if divisor == 0.0 {
        return Err(format!("Derived field {} has a zero divisor.", field_name));
    }
    let noise_std_dev = optional_number_entry(object, "noise", 0.0)?;
    if noise_std_dev < 0.0 {
        return Err(format!("Derived field {} has a negative noise level.", field_name));
    }
    Ok(FieldGenerator::Derived {
        source: source.to_string(),
        offset: offset,
        divisor: divisor,
        noise_std_dev: noise_std_dev
    })
}

fn string_entry<'a>(object: &'a Map<String, Value>, key: &str, missing: &str)
        -> Result<&'a str, String> {
    object.get(key)
        .ok_or(missing.to_string())?
        .as_str()
        .ok_or(format!("'{}' must be a string!", key))
}

fn integer_entry(object: &Map<String, Value>, key: &str, expected: &str)
        -> Result<i64, String> {
    object.get(key)
        .ok_or(format!("'{}' is required for this field.", key))?
        .as_i64()
        .ok_or(format!("'{}' must be {}!", key, expected))
}

fn number_entry(object: &Map<String, Value>, key: &str, expected: &str)
        -> Result<f64, String> {
    object.get(key)
        .ok_or(format!("'{}' is required for this field.", key))?
        .as_f64()
        .ok_or(format!("'{}' must be {}!", key, expected))
}

fn optional_number_entry(object: &Map<String, Value>, key: &str, default: f64)
        -> Result<f64, String> {
    match object.get(key) {
        Some(value) => value.as_f64()
            .ok_or(format!("'{}' must be a number!", key)),
        None => Ok(default)
    }
}
