use std::sync::Arc;

use anyhow::Context;
use studio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(std::iter::once(BASE_TEMPLATE).chain(TEMPLATES.iter().copied()))
            .context("Failed to compile email templates")?;

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera
            .render(T::NAME, &context)
            .with_context(|| format!("Failed to render template {}", T::NAME))
    }
}

#[cfg(test)]
mod tests {
    use studio_templates_contracts::{
        ContactMessageData, ContactMessageHtmlTemplate, ContactMessageTextTemplate, TemplateBrand,
    };

    use super::*;

    fn data() -> ContactMessageData {
        ContactMessageData {
            brand: TemplateBrand {
                name: "Shea & Co".into(),
                url: Some("https://example.com/".into()),
                logo: None,
            },
            interest: "—".into(),
            name: "Jane \"JD\" Doe".into(),
            email: "jane@x.com".into(),
            phone: "—".into(),
            message: "Hello & welcome. Second sentence.".into(),
        }
    }

    #[test]
    fn html_is_escaped() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut.render(&ContactMessageHtmlTemplate(data())).unwrap();

        // Assert
        assert!(result.contains("Shea &amp; Co"));
        assert!(result.contains("Jane &quot;JD&quot; Doe"));
        assert!(result.contains("Hello &amp; welcome. Second sentence."));
        assert!(result.contains("<strong style=\"display:inline-block;width:110px\">Interest:</strong> —"));
        assert!(result.contains("Sent from the website contact form."));
        assert!(!result.contains("<img"));
    }

    #[test]
    fn html_brand_logo() {
        let sut = TemplateServiceImpl::new().unwrap();
        let mut data = data();
        data.brand.logo = Some("https://example.com/logo.png".into());

        let result = sut.render(&ContactMessageHtmlTemplate(data)).unwrap();

        assert!(result.contains("<img src=\"https:&#x2F;&#x2F;example.com&#x2F;logo.png\""));
    }

    #[test]
    fn text_is_verbatim() {
        let sut = TemplateServiceImpl::new().unwrap();

        let result = sut.render(&ContactMessageTextTemplate(data())).unwrap();

        assert_eq!(
            result.trim_end(),
            "New Contact Message\n\
             --------------------\n\
             Interest: —\n\
             Name:     Jane \"JD\" Doe\n\
             Email:    jane@x.com\n\
             Phone:    —\n\
             \n\
             Message:\n\
             Hello & welcome. Second sentence."
        );
    }
}
