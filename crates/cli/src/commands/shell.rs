//! Interactive storefront session.
//!
//! Reads one command per line from stdin, applies it to the session's
//! [`Store`], and writes the resulting page to stdout. Each line is split
//! into words (single and double quotes group words) and parsed by clap, so
//! `help` and `<command> --help` work as usual.
//!
//! Input mistakes (unknown ids, invalid forms, bad sign-in details) are
//! reported and the session continues. Only failures to write output end it.

use std::io::Write;
use std::num::NonZeroU32;

use clap::{Args, Parser};
use secrecy::SecretString;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use producthub_core::ProductId;
use producthub_storefront::forms::{ProductForm, SUGGESTED_CATEGORIES};
use producthub_storefront::pages::{self, product::clamp_selector_quantity};
use producthub_storefront::services::{AuthService, CatalogService};
use producthub_storefront::views::{cart_totals, distinct_categories};
use producthub_storefront::{AppError, Store, StorefrontConfig};

use super::{ListArgs, ShowArgs};

const PROMPT: &str = "producthub> ";

// =============================================================================
// Commands
// =============================================================================

/// Commands accepted at the session prompt.
#[derive(Debug, Parser)]
#[command(name = "producthub", no_binary_name = true, disable_version_flag = true)]
pub enum SessionCommand {
    /// Browse products with optional filters
    List(ListArgs),
    /// Show a product's detail page
    Show(ShowArgs),
    /// Add a product to the cart
    AddToCart {
        /// Product ID
        id: String,
        /// Units to add (at least 1, at most the stock on hand)
        #[arg(short, long, default_value_t = NonZeroU32::MIN)]
        quantity: NonZeroU32,
    },
    /// Set a cart line's quantity (0 or less removes it)
    SetQuantity {
        /// Product ID
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Show the cart page
    Cart,
    /// Show the cart dropdown preview
    Preview,
    /// Set a product's stock on hand
    Stock {
        /// Product ID
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Add a new product to the catalog
    NewProduct(NewProductArgs),
    /// Sign in with email and password
    SignIn { email: String, password: String },
    /// Create an account with email and password
    SignUp {
        email: String,
        password: String,
        /// Display name (defaults to the part of the email before @)
        #[arg(short, long, default_value = "")]
        name: String,
    },
    /// Sign out
    SignOut,
    /// List catalog categories
    Categories,
    /// Print the session state as JSON
    Export,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Add-product form fields. Values are validated together on submit.
#[derive(Debug, Clone, Args)]
pub struct NewProductArgs {
    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,
    #[arg(long, default_value = "")]
    pub name: String,
    /// Category (Electronics, Audio, Wearables, Accessories, Other, or any text)
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub specification: String,
    /// Rating from 0 to 5
    #[arg(long, default_value = "5")]
    pub rating: String,
    #[arg(long, default_value = "")]
    pub price: String,
    /// Units in stock
    #[arg(long, default_value = "")]
    pub quantity: String,
}

impl From<NewProductArgs> for ProductForm {
    fn from(args: NewProductArgs) -> Self {
        Self {
            image: args.image,
            name: args.name,
            category: args.category,
            description: args.description,
            specification: args.specification,
            rating: args.rating,
            price: args.price,
            quantity: args.quantity,
        }
    }
}

// =============================================================================
// Line Splitting
// =============================================================================

/// Errors splitting an input line into words.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
}

/// Split a line into words. Quotes group words and are removed; a backslash
/// escapes the next character outside single quotes.
///
/// # Errors
///
/// Returns [`SplitError::UnterminatedQuote`] if a quote is never closed.
pub fn split_words(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(SplitError::UnterminatedQuote(q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

// =============================================================================
// Session
// =============================================================================

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session: the store it owns and where output goes.
pub struct Session<W> {
    store: Store,
    config: StorefrontConfig,
    auth: AuthService,
    catalog: CatalogService,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session over `store`, writing pages to `out`.
    #[must_use]
    pub fn new(store: Store, config: StorefrontConfig, out: W) -> Self {
        Self {
            auth: AuthService::from_config(&config),
            catalog: CatalogService::from_config(&config),
            store,
            config,
            out,
        }
    }

    /// The session's store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Parse and apply one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if output cannot be written or a page fails to
    /// render. Input mistakes are reported to the output instead.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow, AppError> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match SessionCommand::try_parse_from(words) {
            Ok(command) => command,
            Err(e) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command).await {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_user_error() => {
                warn!(error = %e, "Command rejected");
                self.report(&e)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    async fn execute(&mut self, command: SessionCommand) -> Result<Flow, AppError> {
        match command {
            SessionCommand::List(args) => {
                let page = pages::render_listing(&self.store, &self.config, &args.to_query())?;
                self.out.write_all(page.as_bytes())?;
            }
            SessionCommand::Show(args) => {
                let page = pages::render_product(&self.store, &self.config, &args.product_id(), args.page)?;
                self.out.write_all(page.as_bytes())?;
            }
            SessionCommand::AddToCart { id, quantity } => self.add_to_cart(&ProductId::from(id), quantity)?,
            SessionCommand::SetQuantity { id, quantity } => {
                let id = ProductId::from(id);
                if self.store.cart_line(&id).is_none() {
                    writeln!(self.out, "Not in cart: {id}")?;
                } else {
                    self.store.set_cart_quantity(&id, quantity);
                    self.write_cart_count()?;
                }
            }
            SessionCommand::Remove { id } => {
                let id = ProductId::from(id);
                if self.store.cart_line(&id).is_none() {
                    writeln!(self.out, "Not in cart: {id}")?;
                } else {
                    self.store.remove_from_cart(&id);
                    self.write_cart_count()?;
                }
            }
            SessionCommand::Cart => {
                let page = pages::render_cart(&self.store, &self.config)?;
                self.out.write_all(page.as_bytes())?;
            }
            SessionCommand::Preview => {
                let page = pages::render_cart_preview(&self.store, &self.config)?;
                self.out.write_all(page.as_bytes())?;
            }
            SessionCommand::Stock { id, quantity } => {
                let id = ProductId::from(id);
                if !self.store.set_product_quantity(&id, quantity) {
                    return Err(AppError::NotFound(id.into_inner()));
                }
                if let Some(product) = self.store.product(&id) {
                    let label = product.stock_status(self.config.low_stock_threshold).label();
                    writeln!(self.out, "{}: {label}", product.name)?;
                }
            }
            SessionCommand::NewProduct(args) => {
                writeln!(self.out, "Adding product...")?;
                self.out.flush()?;
                let form = ProductForm::from(args);
                let id = self.catalog.submit(&mut self.store, &form).await?;
                writeln!(self.out, "Product added with ID {id}")?;
            }
            SessionCommand::SignIn { email, password } => {
                writeln!(self.out, "Signing in...")?;
                self.out.flush()?;
                let user = self.auth.sign_in(&email, &SecretString::from(password)).await?;
                writeln!(self.out, "Signed in as {}", user.name)?;
                self.store.set_user(Some(user));
            }
            SessionCommand::SignUp { email, password, name } => {
                writeln!(self.out, "Creating account...")?;
                self.out.flush()?;
                let user = self
                    .auth
                    .sign_up(&name, &email, &SecretString::from(password))
                    .await?;
                writeln!(self.out, "Welcome, {}", user.name)?;
                self.store.set_user(Some(user));
            }
            SessionCommand::SignOut => {
                self.store.set_user(None);
                writeln!(self.out, "Signed out")?;
            }
            SessionCommand::Categories => {
                for category in distinct_categories(self.store.products()) {
                    writeln!(self.out, "{category}")?;
                }
            }
            SessionCommand::Export => {
                let snapshot = serde_json::to_string_pretty(&self.store)?;
                writeln!(self.out, "{snapshot}")?;
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Add to cart through the product page quantity selector, which offers
    /// between one unit and the stock on hand.
    fn add_to_cart(&mut self, id: &ProductId, requested: NonZeroU32) -> Result<(), AppError> {
        let Some(product) = self.store.product(id).cloned() else {
            return Err(AppError::NotFound(id.to_string()));
        };
        let Some(quantity) = clamp_selector_quantity(requested.get(), product.quantity) else {
            writeln!(self.out, "{} is out of stock", product.name)?;
            return Ok(());
        };
        if quantity < requested {
            writeln!(self.out, "Only {} available", product.quantity)?;
        }

        self.store.add_to_cart(&product, quantity);
        writeln!(self.out, "Added {} x {} to cart", quantity, product.name)?;
        self.write_cart_count()
    }

    fn write_cart_count(&mut self) -> Result<(), AppError> {
        let totals = cart_totals(self.store.cart());
        writeln!(self.out, "Cart: {} item(s)", totals.total_items)?;
        Ok(())
    }

    fn report(&mut self, error: &AppError) -> Result<(), AppError> {
        match error {
            AppError::Invalid(errors) => {
                writeln!(self.out, "Product not added:")?;
                for (field, message) in errors.iter() {
                    writeln!(self.out, "  {field}: {message}")?;
                }
                writeln!(self.out, "Suggested categories: {}", SUGGESTED_CATEGORIES.join(", "))?;
            }
            other => writeln!(self.out, "{other}")?,
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), AppError> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Run an interactive session on stdin/stdout until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub async fn run(store: Store, config: StorefrontConfig) -> Result<(), AppError> {
    let mut session = Session::new(store, config, std::io::stdout());
    writeln!(
        session.out,
        "Welcome to {}. Type 'help' for commands, 'quit' to leave.",
        pages::BRAND
    )?;
    info!("Session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        session.prompt()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(session.out)?;
            break;
        };
        if session.handle_line(&line).await? == Flow::Quit {
            break;
        }
    }

    info!(cart_lines = session.store().cart().len(), "Session ended");
    Ok(())
}
