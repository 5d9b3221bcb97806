use colored::Colorize;
use tracing_subscriber::EnvFilter;

use polymorphism::cards::{Card, Rank, Suit};
use polymorphism::fraction::Fraction;
use polymorphism::shapes::{Circle, Parallelogram, Rectangle, Rhombus, Shape, Square};
use polymorphism::vehicles::{Bus, CarCounter, Minivan, PassengerCar, Vehicle};

fn main() {
    // RUST_LOG=debug surfaces the constructor trace events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=== Shapes: dispatch through the Shape trait ===".bold());
    let shapes: Vec<(&str, Box<dyn Shape>)> = vec![
        ("Parallelogram", Box::new(Parallelogram::new(2.0, 3.0))),
        ("Circle", Box::new(Circle::new(4.0))),
        ("Rectangle", Box::new(Rectangle::new(5.0, 7.0))),
        ("Square", Box::new(Square::new(4.0, 9.0))),
        ("Rhombus", Box::new(Rhombus::new(3.0, 6.0))),
    ];
    for (name, shape) in &shapes {
        println!("{name}'s area: {}", shape.area());
    }

    println!();
    println!("{}", "=== Vehicles: one base identity per car ===".bold());
    let mut counter = CarCounter::new();
    {
        let _passenger = PassengerCar::new(&mut counter, "Toyota", "Camry");
    }
    {
        let _bus = Bus::new(&mut counter, "Ikarus", "250 SL");
    }
    {
        let van = Minivan::new(&mut counter, "Dodge", "Caravan");
        println!(
            "Minivan \"{}\" shares a single base: {}",
            van.model(),
            van.has_single_base()
        );
    }
    println!("Cars built: {}", counter.built());

    println!();
    println!("{}", "=== Fractions: std::ops overloads ===".bold());
    let a = Fraction::new(1, 3);
    let b = Fraction::new(4, 5);
    println!("1/3 + 4/5 = {}", a + b);
    println!("1/3 - 4/5 = {}", a - b);
    println!("2/3 * 4/7 = {}", Fraction::new(2, 3) * Fraction::new(4, 7));
    println!("1/6 / 3/8 = {}", Fraction::new(1, 6) / Fraction::new(3, 8));
    println!("-2/5 = {}", -Fraction::new(2, 5));

    let a = Fraction::new(1, 3);
    let b = Fraction::new(2, 6);
    println!("1/3 != 2/6 ? {}", a != b);
    println!("1/3 == 2/6 ? {}", a == b);
    println!("1/3 >  2/6 ? {}", a > b);
    println!("1/3 >= 2/6 ? {}", a >= b);
    println!("1/3 <  2/6 ? {}", a < b);
    println!("1/3 <= 2/6 ? {}", a <= b);

    let parsed: Fraction = "23/15".parse().expect("well-formed fraction");
    println!("\"23/15\" parses back to {} (value {})", parsed, parsed.value());

    println!();
    println!("{}", "=== Cards: plain enums ===".bold());
    let mut card = Card::new(Suit::Spades, Rank::Queen);
    println!(
        "{card} is worth {} points, face up: {}",
        card.rank().points(),
        card.is_visible()
    );
    card.flip();
    println!("After a flip, face up: {}", card.is_visible());
    println!(
        "Jack / Queen / King / Ace score {} / {} / {} / {}",
        Rank::Jack.points(),
        Rank::Queen.points(),
        Rank::King.points(),
        Rank::Ace.points()
    );
}
