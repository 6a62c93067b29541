//! Example: a "shapes" scope registered as a module, extended with one command, then resolved.

use locator_rs::{logging, register, Constructible, Locator, LocatorConfig, ScopeModule};

#[derive(Debug, Constructible)]
struct Circle {
    radius: f64,
}

#[derive(Debug, Constructible)]
struct Rect {
    w: f64,
    h: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LocatorConfig::from_json_str(r#"{ "name": "shapes-demo", "log_filter": "debug" }"#)?;
    logging::init_from(&config)?;

    let mut locator = Locator::init(&config)?;
    let mut shapes = ScopeModule::new("shapes")
        .constructible::<Circle, _, _>(|radius: f64| Circle { radius })
        .constructible::<Rect, _, _>(|w: f64, h: f64| Rect { w, h });
    locator.register(&mut shapes)?;

    let square = register!(locator.container(), "shapes", "square", |side: f64| Rect { w: side, h: side });
    locator.execute(&square)?;

    let circle: Circle = locator.construct("shapes", (1.5,))?;
    let rect: Rect = locator.construct("shapes", (2.0, 3.0))?;
    let sq: Rect = locator.resolve("shapes", "square", (4.0,))?;
    println!("{:?} {:?} {:?}", circle, rect, sq);
    println!("{}", locator.container().manifest());

    locator.teardown();
    Ok(())
}
