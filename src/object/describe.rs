//! Debug rendering of model objects

use super::ObjectRef;

impl ObjectRef {
    /// Render the display-marked features.
    ///
    /// Attributes and group features are listed in feature order; child
    /// objects appear only inside groups. A proxy shows just its URI.
    pub fn describe(&self) -> String {
        let (class, proxy) = {
            let data = self.0.borrow();
            (data.class, data.proxy_uri.clone())
        };
        if let Some(uri) = proxy {
            return format!("{} (proxyURI: {})", class.name, uri);
        }

        let fields: Vec<String> = class
            .features()
            .iter()
            .filter(|f| f.is_displayed())
            .map(|f| match self.get(f.id) {
                Ok(value) => format!("{}: {}", f.name, value),
                Err(_) => format!("{}: ?", f.name),
            })
            .collect();
        if fields.is_empty() {
            class.name.to_string()
        } else {
            format!("{} ({})", class.name, fields.join(", "))
        }
    }
}
