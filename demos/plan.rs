use lanebits::config::log_build_config;
use lanebits::{rotl64, swab64, BUILD, PLAN};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    log_build_config();

    println!("Build: {}", BUILD);
    for (primitive, strategy) in PLAN.iter() {
        println!("  {:<13} {}", primitive.name(), strategy.name());
    }

    let x = 0x0123_4567_89AB_CDEF_u64;
    println!("Input:        {:#018x}", x);
    println!("swab64:       {:#018x}", swab64(x));
    println!("rotl64(x, 8): {:#018x}", rotl64(x, 8));
}
