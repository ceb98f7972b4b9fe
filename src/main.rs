use covergen::menu;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    menu::run()?;
    Ok(())
}
