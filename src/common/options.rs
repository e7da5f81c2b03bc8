use serenity::all::{ResolvedOption, ResolvedValue};

#[derive(Debug, Clone)]
pub struct Options<'a> {
    pub options: Vec<ResolvedOption<'a>>,
}

impl Options<'_> {
    /// Looks up a string option, descending into the invoked subcommand.
    pub fn get_string(&self, name: &str) -> Option<String> {
        for option in &self.options {
            match &option.value {
                ResolvedValue::SubCommandGroup(cmd) | ResolvedValue::SubCommand(cmd) => {
                    let sub_options = Options {
                        options: cmd.clone(),
                    };
                    return sub_options.get_string(name);
                }
                ResolvedValue::String(string) => {
                    if option.name == name {
                        return Some((*string).to_string());
                    }
                }
                _ => continue,
            }
        }
        None
    }
}
