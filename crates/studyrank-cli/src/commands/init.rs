//! The `studyrank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("studyrank.toml").exists() {
        println!("studyrank.toml already exists, skipping.");
    } else {
        std::fs::write("studyrank.toml", SAMPLE_CONFIG)?;
        println!("Created studyrank.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit studyrank.toml with your display name and time zone");
    println!("  2. Run: studyrank rank --sessions 120 --efficiency 85");
    println!("  3. Run: studyrank standings --log my-days.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studyrank configuration

display_name = "YOU (CANDIDATE)"

# Minutes east of UTC used to decide "today" (360 = UTC+06:00).
utc_offset_minutes = 360

# Fix the peer jitter for reproducible output.
# jitter_seed = 42

monthly_target_sessions = 310
"#;
