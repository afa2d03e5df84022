use crate::app::render::Renderer;
use crate::core::cart::CartState;
use crate::core::catalog::{CatalogHandle, LoadStatus};
use crate::core::store::CartStore;
use crate::core::{ConfigProvider, ProductId};
use crate::utils::error::Result;
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP_TEXT: &str = "\
Commands:
  list | ls            show the catalog
  add <id> | + <id>    put one of a product in the cart
  remove <id> | - <id> take one of a product out of the cart
  cart                 open or close the cart panel
  open | close         open or close the cart panel
  badge                show how many items are in the cart
  help                 show this list
  quit | exit          leave the shop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Add(ProductId),
    Remove(ProductId),
    ToggleCart,
    OpenCart,
    CloseCart,
    Badge,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {verb} <product id>")]
    MissingId { verb: String },

    #[error("'{0}' is not a product id")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();

        let product_id = |verb: &str, arg: Option<&str>| match arg {
            None => Err(CommandError::MissingId {
                verb: verb.to_string(),
            }),
            Some(raw) => raw
                .parse::<ProductId>()
                .map_err(|_| CommandError::InvalidId(raw.to_string())),
        };

        match verb.as_str() {
            "list" | "ls" => Ok(Command::List),
            "add" | "+" => product_id(verb.as_str(), words.next()).map(Command::Add),
            "remove" | "-" => product_id(verb.as_str(), words.next()).map(Command::Remove),
            "cart" => Ok(Command::ToggleCart),
            "open" => Ok(Command::OpenCart),
            "close" => Ok(Command::CloseCart),
            "badge" => Ok(Command::Badge),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// One user's visit to the shop: the loading catalog, the cart, and whether the cart panel is open.
pub struct ShopSession<C: ConfigProvider> {
    settings: C,
    catalog: CatalogHandle,
    store: CartStore,
    cart_open: bool,
}

impl<C: ConfigProvider> ShopSession<C> {
    pub fn new(settings: C, catalog: CatalogHandle) -> Self {
        let mut store = CartStore::new();
        store.subscribe(|state: &CartState| {
            tracing::info!(
                items = state.total_item_count(),
                lines = state.len(),
                "Cart badge updated"
            );
        });

        Self {
            settings,
            catalog,
            store,
            cart_open: false,
        }
    }

    pub fn cart(&self) -> &CartState {
        self.store.state()
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    fn renderer(&self) -> Renderer<'_, C> {
        Renderer::new(&self.settings)
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Continue(String::new());
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => Outcome::Continue(e.to_string()),
        }
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::debug!("Executing {:?}", command);

        let text = match command {
            Command::List => self.renderer().catalog(&self.catalog.status()),
            Command::Add(id) => self.add(id),
            Command::Remove(id) => {
                self.store.remove_one(id);
                self.after_cart_change()
            }
            Command::ToggleCart => {
                self.cart_open = !self.cart_open;
                self.cart_view()
            }
            Command::OpenCart => {
                self.cart_open = true;
                self.cart_view()
            }
            Command::CloseCart => {
                self.cart_open = false;
                self.cart_view()
            }
            Command::Badge => self.renderer().badge(self.store.state()),
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => return Outcome::Quit,
        };

        Outcome::Continue(text)
    }

    fn add(&mut self, id: ProductId) -> String {
        let status = self.catalog.status();
        let entry = match &status {
            LoadStatus::Loaded(_) => match status.find(id) {
                Some(entry) => entry.clone(),
                None => return format!("No product with id {} in the catalog.", id),
            },
            other => return self.renderer().catalog(other),
        };

        self.store.add(entry);
        self.after_cart_change()
    }

    fn after_cart_change(&self) -> String {
        if self.cart_open {
            format!(
                "{}\n{}",
                self.renderer().badge(self.store.state()),
                self.renderer().cart_panel(self.store.state())
            )
        } else {
            self.renderer().badge(self.store.state())
        }
    }

    fn cart_view(&self) -> String {
        if self.cart_open {
            self.renderer().cart_panel(self.store.state())
        } else {
            "Cart closed.".to_string()
        }
    }

    /// Reads commands until end of input or `quit`. The catalog keeps loading in the
    /// background and is printed as soon as it resolves.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut watcher = self.catalog.clone();
        let initial = self.catalog.status();
        let mut announced = !initial.is_pending();

        write_block(output, &self.renderer().catalog(&initial)).await?;

        loop {
            tokio::select! {
                status = watcher.wait(), if !announced => {
                    announced = true;
                    write_block(output, &self.renderer().catalog(&status)).await?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.handle_line(&line) {
                        Outcome::Continue(text) => write_block(output, &text).await?,
                        Outcome::Quit => break,
                    }
                }
            }
        }

        output.flush().await?;
        Ok(())
    }
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
