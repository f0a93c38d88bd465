use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Shown in the console banner so a deployed page can be matched to a build.
    EmitBuilder::builder()
        .build_timestamp()
        .cargo_target_triple()
        .rustc_semver()
        .emit()?;
    Ok(())
}
