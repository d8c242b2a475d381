extern crate getopts;
extern crate pad;
extern crate rand;
extern crate serde_json;

#[macro_use]
extern crate log;

pub mod config;
pub mod generators;
pub mod json;
pub mod logger;
pub mod plot;
pub mod schema;
pub mod survey;
pub mod util;

/// Macro for taking the result of many generators and building a
/// delimited row
///
/// # Examples
///
/// let row = gen_row![
///     ",";
///     generate_integer(&mut rng, 158, 190),
///     ...
/// ];
#[macro_export]
macro_rules! gen_row {
    ( $deliminator:expr; $( $generator:expr ),+ ) => {{
        let result = [
        $(
            $generator.to_string(),
        )+
        ];
        result.join($deliminator)
    }}
}

#[cfg(test)]
mod tests {
    #[test]
    fn gen_row_joins_mixed_values() {
        let row = gen_row![
            ",";
            1,
            "Oppenheimer",
            66.4
        ];
        assert_eq!(row, "1,Oppenheimer,66.4");
    }

    #[test]
    fn gen_row_single_value_has_no_delimiter() {
        assert_eq!(gen_row![";"; 42], "42");
    }
}
