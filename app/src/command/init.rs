use fieldcheck_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/fieldcheck/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Map your form field names to field kinds under `form.fields`,");
        println!("   e.g. \"contact_email\": \"email\". Fields named after a kind need no entry.");
        println!();
        println!("🔧 Field kinds: name, group, tg, vk, email, phone, password, id");
        Ok(())
    }
}
