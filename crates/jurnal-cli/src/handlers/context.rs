use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use jurnal_runtime::{Client, Config, Gateway, HttpGateway, SessionStore};

use crate::args::OutputFormat;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, CreateView};

/// Everything a handler needs: resolved paths, effective configuration,
/// the persisted session and the renderer for the chosen output format.
pub struct HandlerContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub store: SessionStore,
    gateway: Option<Arc<dyn Gateway>>,
    renderer: ConsoleRenderer,
}

impl HandlerContext {
    pub fn load(data_dir: PathBuf, format: OutputFormat, api_url: Option<&str>) -> Result<Self> {
        let mut config = Config::load_lenient(&Config::path_in(&data_dir))?;
        if let Some(url) = api_url {
            config.set("api_base_url", url)?;
        }
        let store = SessionStore::new(&data_dir);

        Ok(Self {
            data_dir,
            config,
            store,
            gateway: None,
            renderer: ConsoleRenderer::new(format == OutputFormat::Json),
        })
    }

    /// Routes every request through `gateway` instead of HTTP.
    #[cfg(test)]
    pub fn with_gateway(mut self, gateway: Arc<dyn Gateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Keeps rendered output in memory instead of writing to stdout.
    #[cfg(test)]
    pub fn capturing(mut self) -> Self {
        self.renderer = ConsoleRenderer::capturing(self.renderer.is_json());
        self
    }

    #[cfg(test)]
    pub fn output(&self) -> String {
        self.renderer.take_output()
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn is_json(&self) -> bool {
        self.renderer.is_json()
    }

    /// Client carrying the stored session, over HTTP unless a gateway was injected.
    pub fn client(&self) -> Result<Client> {
        let session = self.store.load()?;
        let gateway: Arc<dyn Gateway> = match &self.gateway {
            Some(gateway) => gateway.clone(),
            None => Arc::new(HttpGateway::new(&self.config.api_base_url, self.config.timeout())?),
        };
        Ok(Client::new(gateway, session))
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        self.renderer.render(view_model)
    }
}
