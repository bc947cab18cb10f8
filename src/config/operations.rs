//! Config loading, validation, and conversion into runtime objects.

use super::model::Config;
use crate::docket::Links;
use crate::error::{DocketPostError, Result};
use crate::publish::CommandPublisher;
use crate::template::{MINUTE, MINUTE_TEMPLATE, POST, POST_TEMPLATE, PostTemplate, TemplateRegistry};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DocketPostError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, or use defaults if the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DocketPostError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DocketPostError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `max_characters` and per-template budgets must be positive
    /// - `publish_timeout_seconds` must be positive
    /// - base URLs must be http(s)
    /// - `publisher_command`, when set, must not be blank
    /// - every configured template must build
    /// - every template's budget must cover its fixed text and links
    pub fn validate(&self) -> Result<()> {
        if self.max_characters == 0 {
            return Err(DocketPostError::UserError(
                "config validation failed: max_characters must be greater than 0".to_string(),
            ));
        }

        if self.publish_timeout_seconds == 0 {
            return Err(DocketPostError::UserError(
                "config validation failed: publish_timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        for (key, url) in [
            ("courtlistener_base_url", &self.courtlistener_base_url),
            ("storage_base_url", &self.storage_base_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(DocketPostError::UserError(format!(
                    "config validation failed: {} must start with http:// or https:// (found '{}')",
                    key, url
                )));
            }
        }

        if let Some(command) = &self.publisher_command
            && command.trim().is_empty()
        {
            return Err(DocketPostError::UserError(
                "config validation failed: publisher_command must not be empty. \
                 Remove it to disable publishing."
                    .to_string(),
            ));
        }

        for (name, template) in self.template_registry()?.iter() {
            check_budget(name, template)?;
        }

        Ok(())
    }

    /// All templates: built-ins with the configured budget, then configured
    /// templates (which may replace built-ins).
    pub fn template_registry(&self) -> Result<TemplateRegistry> {
        let mut registry = TemplateRegistry::default();
        registry.insert(
            POST,
            POST_TEMPLATE.clone().with_max_characters(self.max_characters),
        );
        registry.insert(
            MINUTE,
            MINUTE_TEMPLATE.clone().with_max_characters(self.max_characters),
        );

        for name in self.templates.keys() {
            registry.insert(name.clone(), self.build_template(name)?);
        }

        Ok(registry)
    }

    /// Link builder for the configured base URLs.
    pub fn links(&self) -> Links {
        Links::new(&self.courtlistener_base_url, &self.storage_base_url)
    }

    /// The configured publisher, if any.
    pub fn command_publisher(&self) -> Option<CommandPublisher> {
        self.publisher_command.as_ref().map(|command| {
            CommandPublisher::new(command)
                .with_timeout(Duration::from_secs(self.publish_timeout_seconds))
        })
    }

    fn build_template(&self, name: &str) -> Result<PostTemplate> {
        let configured = &self.templates[name];

        let budget = configured.max_characters.unwrap_or(self.max_characters);
        if budget == 0 {
            return Err(DocketPostError::UserError(format!(
                "config validation failed: template '{}' max_characters must be greater than 0",
                name
            )));
        }

        let template = PostTemplate::new(
            configured.template.as_str(),
            configured.link_placeholders.iter().cloned(),
        )
        .map_err(|e| {
            DocketPostError::UserError(format!(
                "config validation failed: template '{}': {}",
                name, e
            ))
        })?
        .with_max_characters(budget);

        let template = match &configured.truncatable {
            Some(field) => template.with_truncatable(field.as_str()),
            None => template,
        };

        check_budget(name, &template)?;
        Ok(template)
    }
}

/// A budget smaller than the template's own text and links can never be met.
fn check_budget(name: &str, template: &PostTemplate) -> Result<()> {
    if template.max_characters() < template.effective_length() {
        return Err(DocketPostError::UserError(format!(
            "config validation failed: template '{}' needs at least {} characters \
             for its fixed text and links, but max_characters is {}",
            name,
            template.effective_length(),
            template.max_characters()
        )));
    }
    Ok(())
}
