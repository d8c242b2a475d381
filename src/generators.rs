extern crate rand;

use rand::Rng;
use rand::distributions::{IndependentSample, Normal, Range};

/// A calendar date, rendered in DD.MM.YYYY form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: u32
}

impl Date {
    /// Builds a date, rejecting impossible day/month combinations.
    pub fn new(day: u32, month: u32, year: u32) -> Result<Date, String> {
        if month < 1 || month > 12 {
            return Err(format!("Month must be between 1 and 12, got {}", month));
        }
        if day < 1 || day > days_in_month(month, year) {
            return Err(format!("Day {} is out of range for month {} of {}", day, month, year));
        }
        Ok(Date {
            day: day,
            month: month,
            year: year
        })
    }

    /// Parses a DD.MM.YYYY string, the same form the date renders to.
    ///
    /// # Examples
    ///
    /// let anchor = Date::parse("01.12.2023");
    ///
    pub fn parse(text: &str) -> Result<Date, String> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(format!("Expected a DD.MM.YYYY date, got {:?}", text));
        }
        let day = parts[0].trim().parse::<u32>()
            .map_err(|err| format!("Bad day in date {:?}: {}", text, err))?;
        let month = parts[1].trim().parse::<u32>()
            .map_err(|err| format!("Bad month in date {:?}: {}", text, err))?;
        let year = parts[2].trim().parse::<u32>()
            .map_err(|err| format!("Bad year in date {:?}: {}", text, err))?;
        Date::new(day, month, year)
    }

    /// The following calendar day, rolling over months and years.
    pub fn next_day(&self) -> Date {
        if self.day < days_in_month(self.month, self.year) {
            Date { day: self.day + 1, month: self.month, year: self.year }
        } else if self.month < 12 {
            Date { day: 1, month: self.month + 1, year: self.year }
        } else {
            Date { day: 1, month: 1, year: self.year + 1 }
        }
    }

    /// The date `days` calendar days after this one.
    pub fn plus_days(&self, days: u64) -> Date {
        let mut date = *self;
        for _ in 0..days {
            date = date.next_day();
        }
        date
    }
}

impl ToString for Date {
    fn to_string(&self) -> String {
        format!("{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        2 => if is_leap_year(year) { 29 } else { 28 },
        _ => 30
    }
}

/// Generates a random integer from min (inclusive) to max (exclusive)
///
/// # Examples
///
/// let x = generate_integer(&mut rng, 158, 190);
///
pub fn generate_integer<R: rand::Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    let dist = Range::new(min, max);
    dist.ind_sample(rng)
}

/// Generates a random real number from min (inclusive) to max (exclusive)
///
/// # Examples
///
/// let x = generate_real(&mut rng, 60.0, 75.0);
///
pub fn generate_real<R: rand::Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let dist = Range::new(min, max);
    dist.ind_sample(rng)
}

/// Generates a real number from a normal (Gaussian) distribution
///
/// # Examples
///
/// let x = generate_gauss(&mut rng, 0.0, 1.0);
pub fn generate_gauss<R: rand::Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let dist = Normal::new(mean, std_dev);
    dist.ind_sample(rng)
}

/// Generate a value from a slice of choices, each one equally likely
///
/// # Examples
///
/// let x = vec!["30%", "50%", "70%", "90%"];
/// let y = generate_choice(&mut rng, &x);
///
pub fn generate_choice<'a, R: rand::Rng, T>(rng: &mut R, choices: &'a [T]) -> &'a T {
    &choices[generate_integer(rng, 0, choices.len() as i64) as usize]
}

/// Generate the sequence min..=max in a uniformly random order
///
/// # Examples
///
/// let drawn = generate_permutation(&mut rng, 1, 16);
///
pub fn generate_permutation<R: rand::Rng>(rng: &mut R, min: i64, max: i64) -> Vec<i64> {
    let mut values: Vec<i64> = (min..max + 1).collect();
    rng.shuffle(&mut values);
    values
}
