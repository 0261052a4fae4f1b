mod update_base_settings;

pub use update_base_settings::UpdateBaseSettings;
