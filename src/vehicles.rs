use std::rc::Rc;

use tracing::debug;

// =============================================================================
// Explicit construction counter
// =============================================================================

/// Counts distinct `Car` identities. Owned by whoever builds vehicles and
/// passed `&mut` into every constructor, so tests can run with their own
/// counter instead of poking at process-wide state.
#[derive(Debug, Default)]
pub struct CarCounter {
    built: u32,
}

impl CarCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn built(&self) -> u32 {
        self.built
    }

    fn next(&mut self) -> u32 {
        self.built += 1;
        self.built
    }
}

// =============================================================================
// Shared base identity
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    company: String,
    model: String,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            company: "no_company".to_string(),
            model: "no_model".to_string(),
        }
    }
}

impl Car {
    /// Builds the one base identity a vehicle hangs off of. Every path into
    /// the hierarchy funnels through here, so the counter moves exactly once
    /// per distinct car.
    fn register(counter: &mut CarCounter, company: &str, model: &str) -> Rc<Self> {
        debug!(company, model, "Car::register");
        let car = Self {
            company: company.to_string(),
            model: model.to_string(),
        };
        println!("Car # {}", counter.next());
        println!("Car \"{}\" by {}", car.model, car.company);
        Rc::new(car)
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Capability every vehicle kind exposes: access to its underlying car.
pub trait Vehicle {
    fn car(&self) -> &Car;

    fn company(&self) -> &str {
        self.car().company()
    }

    fn model(&self) -> &str {
        self.car().model()
    }
}

// =============================================================================
// The two intermediate kinds
// =============================================================================

#[derive(Debug)]
pub struct PassengerCar {
    car: Rc<Car>,
}

impl PassengerCar {
    pub fn new(counter: &mut CarCounter, company: &str, model: &str) -> Self {
        Self::from_shared(Car::register(counter, company, model))
    }

    fn from_shared(car: Rc<Car>) -> Self {
        debug!("PassengerCar::from_shared");
        println!("Passenger car \"{}\" by {}", car.model(), car.company());
        Self { car }
    }
}

impl Vehicle for PassengerCar {
    fn car(&self) -> &Car {
        &self.car
    }
}

#[derive(Debug)]
pub struct Bus {
    car: Rc<Car>,
}

impl Bus {
    pub fn new(counter: &mut CarCounter, company: &str, model: &str) -> Self {
        Self::from_shared(Car::register(counter, company, model))
    }

    fn from_shared(car: Rc<Car>) -> Self {
        debug!("Bus::from_shared");
        println!("Bus \"{}\" by {}", car.model(), car.company());
        Self { car }
    }
}

impl Vehicle for Bus {
    fn car(&self) -> &Car {
        &self.car
    }
}

// =============================================================================
// The diamond: one base, two paths
// =============================================================================

/// Composes a `PassengerCar` and a `Bus` over a single shared `Car`.
/// Both branches clone the same `Rc`, so constructing a minivan registers
/// one car, not two, and both paths observe identical company/model.
#[derive(Debug)]
pub struct Minivan {
    passenger: PassengerCar,
    bus: Bus,
}

impl Minivan {
    pub fn new(counter: &mut CarCounter, company: &str, model: &str) -> Self {
        let car = Car::register(counter, company, model);
        let passenger = PassengerCar::from_shared(Rc::clone(&car));
        let bus = Bus::from_shared(car);
        debug!("Minivan::new");
        println!("Minivan \"{}\" by {}", bus.model(), bus.company());
        Self { passenger, bus }
    }

    pub fn as_passenger_car(&self) -> &PassengerCar {
        &self.passenger
    }

    pub fn as_bus(&self) -> &Bus {
        &self.bus
    }

    /// True when both inheritance paths resolve to the same base instance.
    pub fn has_single_base(&self) -> bool {
        Rc::ptr_eq(&self.passenger.car, &self.bus.car)
    }
}

impl Vehicle for Minivan {
    fn car(&self) -> &Car {
        self.passenger.car()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_car_counts_once() {
        let mut counter = CarCounter::new();
        let pc = PassengerCar::new(&mut counter, "Toyota", "Camry");
        assert_eq!(counter.built(), 1);
        assert_eq!(pc.company(), "Toyota");
        assert_eq!(pc.model(), "Camry");
    }

    #[test]
    fn test_bus_counts_once() {
        let mut counter = CarCounter::new();
        let bus = Bus::new(&mut counter, "Ikarus", "250 SL");
        assert_eq!(counter.built(), 1);
        assert_eq!(bus.model(), "250 SL");
    }

    #[test]
    fn test_minivan_counts_once_not_twice() {
        let mut counter = CarCounter::new();
        let _van = Minivan::new(&mut counter, "Dodge", "Caravan");
        assert_eq!(counter.built(), 1);
    }

    #[test]
    fn test_minivan_shares_one_base() {
        let mut counter = CarCounter::new();
        let van = Minivan::new(&mut counter, "Dodge", "Caravan");

        assert!(van.has_single_base());
        assert!(Rc::ptr_eq(&van.passenger.car, &van.bus.car));

        // Both paths observe the same field values.
        assert_eq!(van.as_passenger_car().company(), "Dodge");
        assert_eq!(van.as_bus().company(), "Dodge");
        assert_eq!(van.as_passenger_car().model(), van.as_bus().model());
    }

    #[test]
    fn test_counter_accumulates_across_vehicles() {
        let mut counter = CarCounter::new();
        let _pc = PassengerCar::new(&mut counter, "Toyota", "Camry");
        let _bus = Bus::new(&mut counter, "Ikarus", "250 SL");
        let _van = Minivan::new(&mut counter, "Dodge", "Caravan");
        assert_eq!(counter.built(), 3);
    }

    #[test]
    fn test_separate_minivans_have_separate_bases() {
        let mut counter = CarCounter::new();
        let a = Minivan::new(&mut counter, "Dodge", "Caravan");
        let b = Minivan::new(&mut counter, "Chrysler", "Voyager");

        assert_eq!(counter.built(), 2);
        assert!(!Rc::ptr_eq(&a.passenger.car, &b.passenger.car));
    }

    #[test]
    fn test_default_car_placeholders() {
        let car = Car::default();
        assert_eq!(car.company(), "no_company");
        assert_eq!(car.model(), "no_model");
    }

    #[test]
    fn test_vehicle_trait_objects() {
        let mut counter = CarCounter::new();
        let vehicles: Vec<Box<dyn Vehicle>> = vec![
            Box::new(PassengerCar::new(&mut counter, "Toyota", "Camry")),
            Box::new(Bus::new(&mut counter, "Ikarus", "250 SL")),
            Box::new(Minivan::new(&mut counter, "Dodge", "Caravan")),
        ];

        let models: Vec<&str> = vehicles.iter().map(|v| v.model()).collect();
        assert_eq!(models, vec!["Camry", "250 SL", "Caravan"]);
    }
}
