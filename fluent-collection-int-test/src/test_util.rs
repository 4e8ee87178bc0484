use fluent_collection::collection::Collection;
use fluent_collection::common::{Convertible, Field, FieldAccess, Record, Value};
use fluent_collection::errors::CollectionResult;
use fluent_collection::record;
use std::backtrace::Backtrace;
use std::time::Instant;

/// Builds a fixture with `before` and runs `test` against it.
///
/// An error from either step fails the test with the error, its elapsed time
/// and a backtrace of the failing run.
pub fn run_test<C, B, T>(before: B, test: T)
where
    B: Fn() -> CollectionResult<C>,
    T: Fn(C) -> CollectionResult<()>,
{
    let start_time = Instant::now();
    let result = match before() {
        Ok(ctx) => test(ctx).map_err(|e| format!("Test failed: {:?}", e)),
        Err(e) => Err(format!("Before run failed: {:?}", e)),
    };
    let elapsed = start_time.elapsed();

    match result {
        Ok(_) => log::debug!("Test passed in {:?}", elapsed),
        Err(e) => {
            let backtrace = Backtrace::capture().to_string();
            eprintln!("\n==================== TEST FAILED ====================");
            eprintln!("Error (after {:?}): {}", elapsed, e);
            if !backtrace.is_empty() && !backtrace.contains("disabled") {
                eprintln!("\nBacktrace:\n{}", backtrace);
            }
            eprintln!("=====================================================\n");
            panic!("{}", e);
        }
    }
}

pub fn integers() -> CollectionResult<Collection<i64>> {
    Ok(Collection::from_values(1..=9))
}

pub fn characters() -> CollectionResult<Collection<String>> {
    Ok(Collection::from_values(
        ["a", "b", "c", "d", "e", "f"].iter().map(|c| c.to_string()),
    ))
}

pub fn coffees() -> CollectionResult<Collection<Record>> {
    Ok(Collection::from(vec![
        record! { name: "Black", ingredients: [], cost: 4.50 },
        record! { name: "Decaf", ingredients: [], cost: 5 },
        record! { name: "Cappuccino", ingredients: ["Milk", "Chocolate"], cost: 7.50 },
        record! { name: "Submarine", ingredients: ["Milk", "Chocolate Bar"], cost: 9.99 },
    ]))
}

/// The coffee menu as plain structs instead of records.
pub fn coffee_objects() -> CollectionResult<Collection<Coffee>> {
    Ok(Collection::from(vec![
        Coffee::new("Black", &[], 4.50),
        Coffee::new("Decaf", &[], 5.0),
        Coffee::new("Cappuccino", &["Milk", "Chocolate"], 7.50),
        Coffee::new("Submarine", &["Milk", "Chocolate Bar"], 9.99),
    ]))
}

pub fn people() -> CollectionResult<Collection<Record>> {
    Ok(Collection::from(vec![
        record! { Name: "John", Age: 21, sex: "M" },
        record! { Name: "Nathan", Age: 19, sex: "M" },
        record! { Name: "July", Age: 21, sex: "F" },
    ]))
}

pub fn exams() -> CollectionResult<Collection<Record>> {
    let results = [
        ("Math", "ok", 4),
        ("Statistics", "ok", 4),
        ("Programming", "ok", 4),
        ("Accounting", "failed", 4),
        ("Math", "ok", 5),
        ("Statistics", "failed", 5),
        ("Programming", "ok", 5),
        ("Accounting", "failed", 5),
        ("Math", "failed", 6),
        ("Statistics", "failed", 6),
        ("Programming", "ok", 6),
        ("Accounting", "ok", 6),
    ];

    Ok(Collection::from_values(
        results
            .into_iter()
            .map(|(class, status, month)| record! { class: class, status: status, month: month }),
    ))
}

pub fn tolkien() -> Author {
    Author::new("J. R. R. Tolkien", "English")
}

pub fn hunter_thompson() -> Author {
    Author::new("Hunter S. Thompson", "American")
}

pub fn mark_twain() -> Author {
    Author::new("Mark Twain", "American")
}

pub fn library() -> CollectionResult<Collection<Book>> {
    Ok(Collection::from(vec![
        Book::new("The Hobbit", tolkien(), "1937-09-21", 4.99, &["fiction", "fantasy"]),
        Book::new(
            "The Fellowship of the Ring (LOTRO #1)",
            tolkien(),
            "1954-07-29",
            14.50,
            &["fiction", "fantasy"],
        ),
        Book::new("The Two Towers (LOTRO #2)", tolkien(), "1954-11-11", 14.50, &["fiction", "fantasy"]),
        Book::new(
            "The Return of the King (LOTRO #3)",
            tolkien(),
            "1955-10-20",
            14.50,
            &["fiction", "fantasy"],
        ),
        Book::new("Fear and Loathing in Las Vegas", hunter_thompson(), "1972-07-01", 10.0, &["gonzo"]),
        Book::new("Hell's Angels", hunter_thompson(), "1967-01-01", 8.99, &["gonzo"]),
        Book::new("The Adventures of Tom Sawyer", mark_twain(), "1876-01-01", 3.50, &["fiction"]),
    ]))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    pub name: String,
    pub ingredients: Vec<String>,
    pub cost: f64,
}

impl Coffee {
    pub fn new(name: &str, ingredients: &[&str], cost: f64) -> Self {
        Coffee {
            name: name.to_string(),
            ingredients: strings(ingredients),
            cost,
        }
    }
}

impl FieldAccess for Coffee {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        Ok(match name {
            "name" => Field::Present(Value::from(&self.name)),
            "ingredients" => Field::Present(self.ingredients.to_value()?),
            "cost" => Field::Present(Value::from(self.cost)),
            _ => Field::Absent,
        })
    }
}

impl Convertible for Coffee {
    fn to_value(&self) -> CollectionResult<Value> {
        let record: Record = [
            ("name", Value::from(&self.name)),
            ("ingredients", self.ingredients.to_value()?),
            ("cost", Value::from(self.cost)),
        ]
        .into_iter()
        .collect();
        Ok(Value::Record(record))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub nationality: String,
}

impl Author {
    pub fn new(name: &str, nationality: &str) -> Self {
        Author {
            name: name.to_string(),
            nationality: nationality.to_string(),
        }
    }
}

impl Convertible for Author {
    fn to_value(&self) -> CollectionResult<Value> {
        Ok(Value::Record(record! {
            name: (&self.name),
            nationality: (&self.nationality),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: Author,
    pub pub_date: String,
    pub price: f64,
    pub genres: Vec<String>,
}

impl Book {
    pub fn new(title: &str, author: Author, pub_date: &str, price: f64, genres: &[&str]) -> Self {
        Book {
            title: title.to_string(),
            author,
            pub_date: pub_date.to_string(),
            price,
            genres: strings(genres),
        }
    }
}

impl Convertible for Book {
    fn to_value(&self) -> CollectionResult<Value> {
        let record: Record = [
            ("title", Value::from(&self.title)),
            ("author", self.author.to_value()?),
            ("pubDate", Value::from(&self.pub_date)),
            ("price", Value::from(self.price)),
            ("genres", self.genres.to_value()?),
        ]
        .into_iter()
        .collect();
        Ok(Value::Record(record))
    }
}

// reads through the record form so that paths like `author.name` resolve
impl FieldAccess for Book {
    fn field(&self, name: &str) -> CollectionResult<Field> {
        self.to_value()?.field(name)
    }
}
