use flexgeohash::{CodecConfig, Coordinate, Direction, Encoding, Geohash, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see detailed logs)
    env_logger::init();

    println!("=== flexgeohash - Getting Started ===\n");

    // === ENCODING ===
    println!("1. Encoding coordinates");
    println!("-----------------------");

    let tokyo = Coordinate::new(35.681, 139.767);
    let hash = flexgeohash::encode(&tokyo, 7, Encoding::Base32)?;
    println!("   Tokyo Station ({}, {}) -> {}", tokyo.latitude, tokyo.longitude, hash);

    // geo points work too (x = longitude, y = latitude)
    let nyc = Point::new(-74.0060, 40.7128);
    println!("   New York -> {}", flexgeohash::encode(&nyc, 9, Encoding::Base32)?);

    for encoding in Encoding::ALL {
        let text = flexgeohash::encode(&tokyo, encoding.max_precision(), encoding)?;
        println!("   {:>6}: {}", encoding, text);
    }
    println!();

    // === DECODING ===
    println!("2. Decoding to a region");
    println!("-----------------------");

    let region = flexgeohash::decode(&hash, Encoding::Base32)?;
    println!(
        "   {} -> center ({:.6}, {:.6}), span ({:.6}, {:.6})",
        hash,
        region.center.latitude,
        region.center.longitude,
        region.span.latitude,
        region.span.longitude
    );
    println!("   contains Tokyo Station: {}\n", region.contains(&tokyo));

    // === NEIGHBORS ===
    println!("3. Neighbors");
    println!("------------");

    let geohash: Geohash = hash.parse()?;
    for (direction, neighbor) in geohash.neighbors().iter() {
        println!("   {:?}: {}", direction, neighbor);
    }
    let around_the_world = Geohash::parse("2", Encoding::Base32)?.neighbor(Direction::West);
    println!("   west of '2' across the date line: {}\n", around_the_world);

    // === PRECISION ===
    println!("4. Changing precision");
    println!("---------------------");

    let mut coarse = Geohash::parse("x", Encoding::Base32)?;
    coarse.set_precision(12)?;
    println!("   'x' at precision 12: {}", coarse);

    // === CONFIGURATION ===
    println!("\n5. Configuration");
    println!("----------------");

    let config = CodecConfig::from_json(r#"{ "precision": 8, "encoding": "base16" }"#)?;
    println!("   {:?} -> {}", config, config.encode(&tokyo)?);

    match flexgeohash::encode(&Coordinate::new(95.0, 0.0), 5, Encoding::Base32) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   rejected: {}", e),
    }

    Ok(())
}
