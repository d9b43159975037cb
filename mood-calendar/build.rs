use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy moods.csv to OUT_DIR for include_str!. When the fixture is
    // missing (fresh checkout before seeding), write a small sample that
    // still exercises every render strategy.
    let fixture = Path::new("../fixtures/moods.csv");
    let dest = Path::new(&out_dir).join("moods.csv");

    if fixture.exists() {
        fs::copy(fixture, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            "\
happy,7,2024-03-01,2024-03-01T09:00:00
happy,6,2024-03-04,2024-03-04T08:30:00
calm,5,2024-03-04,2024-03-04T19:00:00
happy,7,2024-03-07,2024-03-07T08:00:00
happy,5,2024-03-07,2024-03-07T13:00:00
sad,3,2024-03-07,2024-03-07T21:00:00
happy,8,2024-03-15,2024-03-15T08:00:00
happy,8,2024-03-15,2024-03-15T11:00:00
calm,7,2024-03-15,2024-03-15T14:00:00
happy,9,2024-03-15,2024-03-15T17:00:00
anxious,6,2024-03-15,2024-03-15T20:00:00
",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/moods.csv");
}
