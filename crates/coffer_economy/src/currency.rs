//! # Currency
//!
//! **Items in, cents out. Cents in, text out.**
//!
//! A [`Currency`] knows which item kinds are money and what each is worth.
//! It is assembled once with a [`CurrencyBuilder`] and then frozen: every
//! read operation takes `&self`, so a built currency can be shared between
//! threads (`Arc<Currency>`) without locking.
//!
//! ## Invariants
//!
//! 1. `sorted` holds exactly the values of `by_key`, ordered by descending
//!    value (ties by key), after every registration.
//! 2. Every denomination is worth at least one cent.
//! 3. All monetary arithmetic is checked; overflow is an error, never a wrap.
//!
//! ## Example
//!
//! ```rust
//! use coffer_economy::{AmountPattern, Currency, ItemDescriptor, ItemStack};
//!
//! let mut builder = Currency::builder("Coin", "Coins", 2)?.with_named_denominations(true);
//! builder.register(&ItemDescriptor::new("gold_ingot"), 1.0, "Gold", "Golds")?;
//! builder.register(&ItemDescriptor::new("iron_nugget"), 0.01, "Iron", "Irons")?;
//! let currency = builder.build();
//!
//! let stack = ItemStack::new(ItemDescriptor::new("gold_ingot"), 3);
//! assert_eq!(currency.value_of(Some(&stack))?.get(), 300);
//!
//! let pattern: AmountPattern = "%.2f %s".parse()?;
//! assert_eq!(currency.format(&pattern, 3.07)?, "3 Golds, 7 Irons");
//! # Ok::<(), coffer_economy::EconomyError>(())
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::cents::{unit_for_digits, Cents};
use crate::denomination::{Denomination, DenominationKey};
use crate::error::{EconomyError, EconomyResult};
use crate::item::{ItemDescriptor, ItemStack};
use crate::pattern::AmountPattern;

/// How many containers may be nested inside each other by default.
pub const DEFAULT_MAX_CONTAINER_DEPTH: u32 = 8;

/// Separator between denomination parts of a formatted amount.
const SEPARATOR: &str = ", ";

/// Registration phase of a currency.
///
/// Denominations can only be added here; [`CurrencyBuilder::build`] consumes
/// the builder and hands out the read-only [`Currency`].
#[derive(Clone, Debug)]
pub struct CurrencyBuilder {
    name: String,
    name_plural: String,
    digits: u32,
    unit: u64,
    named_denominations: bool,
    include_containers: bool,
    container_kinds: HashSet<String>,
    max_container_depth: u32,
    by_key: HashMap<DenominationKey, Denomination>,
    sorted: Vec<Denomination>,
}

impl CurrencyBuilder {
    /// Starts a currency with the given names and fractional digits.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` if `10^digits` does not fit in a `u64`.
    pub fn new(
        name: impl Into<String>,
        name_plural: impl Into<String>,
        digits: u32,
    ) -> EconomyResult<Self> {
        Ok(Self {
            name: name.into(),
            name_plural: name_plural.into(),
            digits,
            unit: unit_for_digits(digits)?,
            named_denominations: false,
            include_containers: false,
            container_kinds: HashSet::new(),
            max_container_depth: DEFAULT_MAX_CONTAINER_DEPTH,
            by_key: HashMap::new(),
            sorted: Vec::new(),
        })
    }

    /// Show amounts broken down into denomination names.
    #[must_use]
    pub fn with_named_denominations(mut self, named: bool) -> Self {
        self.named_denominations = named;
        self
    }

    /// Value container items by what they hold.
    #[must_use]
    pub fn with_containers(mut self, include: bool) -> Self {
        self.include_containers = include;
        self
    }

    /// Marks an item kind as a container.
    #[must_use]
    pub fn with_container_kind(mut self, kind: impl Into<String>) -> Self {
        self.container_kinds.insert(kind.into());
        self
    }

    /// Sets how many containers may be nested inside each other.
    ///
    /// With `0`, opening any container is reported as too deep.
    #[must_use]
    pub const fn with_max_container_depth(mut self, depth: u32) -> Self {
        self.max_container_depth = depth;
        self
    }

    /// Registers an item kind as a denomination worth `display_value` units.
    ///
    /// Registering the same kind again replaces the earlier denomination.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` if the descriptor is empty, the
    /// value is negative or not finite, or it rounds to less than one cent.
    /// Returns `EconomyError::ArithmeticOverflow` if the value does not fit.
    pub fn register(
        &mut self,
        descriptor: &ItemDescriptor,
        display_value: f64,
        unit_name: impl Into<String>,
        unit_name_plural: impl Into<String>,
    ) -> EconomyResult<()> {
        if descriptor.is_empty() {
            return Err(EconomyError::InvalidConfig(
                "denomination item must not be empty".to_string(),
            ));
        }

        let key = DenominationKey::from(descriptor);
        let value = display_to_cents(display_value, self.unit).map_err(|e| match e {
            EconomyError::InvalidAmount(amount) => EconomyError::InvalidConfig(format!(
                "denomination {key} has invalid value {amount}"
            )),
            other => other,
        })?;
        if value.is_zero() {
            return Err(EconomyError::InvalidConfig(format!(
                "denomination {key} is worth less than one cent ({display_value})"
            )));
        }

        let denomination = Denomination::new(key.clone(), value, unit_name, unit_name_plural);
        if self.by_key.insert(key.clone(), denomination).is_some() {
            tracing::warn!("Denomination {} registered twice, keeping the latest", key);
        }

        // infrequent, so resorting everything is fine
        self.sorted = self.by_key.values().cloned().collect();
        self.sorted.sort();

        tracing::debug!("Registered denomination {} worth {} cents", key, value);
        Ok(())
    }

    /// Denominations registered so far, highest value first.
    #[must_use]
    pub fn denominations(&self) -> &[Denomination] {
        &self.sorted
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> Currency {
        tracing::info!(
            "Currency {} ready: {} denominations, unit {}",
            self.name,
            self.sorted.len(),
            self.unit
        );
        Currency {
            name: self.name,
            name_plural: self.name_plural,
            digits: self.digits,
            unit: self.unit,
            named_denominations: self.named_denominations,
            include_containers: self.include_containers,
            container_kinds: self.container_kinds,
            max_container_depth: self.max_container_depth,
            by_key: self.by_key,
            sorted: self.sorted,
        }
    }
}

/// A frozen currency: denominations plus valuation and formatting rules.
#[derive(Clone, Debug)]
pub struct Currency {
    name: String,
    name_plural: String,
    digits: u32,
    unit: u64,
    named_denominations: bool,
    include_containers: bool,
    container_kinds: HashSet<String>,
    max_container_depth: u32,
    by_key: HashMap<DenominationKey, Denomination>,
    sorted: Vec<Denomination>,
}

impl Currency {
    /// Starts building a currency.
    ///
    /// # Errors
    ///
    /// See [`CurrencyBuilder::new`].
    pub fn builder(
        name: impl Into<String>,
        name_plural: impl Into<String>,
        digits: u32,
    ) -> EconomyResult<CurrencyBuilder> {
        CurrencyBuilder::new(name, name_plural, digits)
    }

    /// Name of the currency.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plural name of the currency.
    #[must_use]
    pub fn name_plural(&self) -> &str {
        &self.name_plural
    }

    /// Fractional digits. With 2 digits the smallest amount is 0.01.
    #[must_use]
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// Cents per display unit, `10^digits`.
    #[must_use]
    pub const fn unit(&self) -> u64 {
        self.unit
    }

    /// Whether amounts are shown broken down into denominations.
    #[must_use]
    pub const fn named_denominations(&self) -> bool {
        self.named_denominations
    }

    /// Whether containers are valued by their contents.
    #[must_use]
    pub const fn includes_containers(&self) -> bool {
        self.include_containers
    }

    /// All denominations, highest value first.
    #[must_use]
    pub fn denominations(&self) -> &[Denomination] {
        &self.sorted
    }

    /// The denomination an item belongs to, if it is money at all.
    #[must_use]
    pub fn denomination_of(&self, descriptor: &ItemDescriptor) -> Option<&Denomination> {
        self.by_key.get(&DenominationKey::from(descriptor))
    }

    /// Value of an item stack in cents.
    ///
    /// Items that are not a denomination are worth nothing. A container with
    /// contents is worth the sum of its contents when containers are
    /// included; its own denomination and stack count are then ignored.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::ArithmeticOverflow` if the value does not fit
    /// in a `u64`, and `EconomyError::ContainerTooDeep` if containers are
    /// nested beyond the configured depth.
    pub fn value_of(&self, stack: Option<&ItemStack>) -> EconomyResult<Cents> {
        match stack {
            Some(stack) => self.value_at_depth(stack, 0),
            None => Ok(Cents::ZERO),
        }
    }

    /// Total value of a set of inventory slots.
    ///
    /// # Errors
    ///
    /// See [`Currency::value_of`].
    pub fn value_of_all(&self, stacks: &[ItemStack]) -> EconomyResult<Cents> {
        self.sum_at_depth(stacks, 0)
    }

    fn value_at_depth(&self, stack: &ItemStack, depth: u32) -> EconomyResult<Cents> {
        if stack.descriptor.is_empty() {
            return Ok(Cents::ZERO);
        }

        if self.include_containers && self.container_kinds.contains(&stack.descriptor.kind) {
            if let Some(contents) = stack.contents() {
                if depth >= self.max_container_depth {
                    return Err(EconomyError::ContainerTooDeep {
                        limit: self.max_container_depth,
                    });
                }
                return self.sum_at_depth(contents, depth + 1);
            }
        }

        match self.denomination_of(&stack.descriptor) {
            Some(denomination) => denomination.value().safe_mul_int(u64::from(stack.count)),
            None => Ok(Cents::ZERO),
        }
    }

    fn sum_at_depth(&self, stacks: &[ItemStack], depth: u32) -> EconomyResult<Cents> {
        stacks.iter().try_fold(Cents::ZERO, |total, stack| {
            total.safe_add(self.value_at_depth(stack, depth)?)
        })
    }

    /// Converts a display amount to cents, rounding half up.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidAmount` for negative or non-finite
    /// amounts and `EconomyError::ArithmeticOverflow` if the result does not
    /// fit in a `u64`.
    pub fn to_cents(&self, display: f64) -> EconomyResult<Cents> {
        display_to_cents(display, self.unit)
    }

    /// Converts cents to a display amount. Lossy for very large values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_display(&self, cents: Cents) -> f64 {
        cents.get() as f64 / self.unit as f64
    }

    /// Greedy split of an amount into denominations, highest value first.
    #[must_use]
    pub fn breakdown(&self, amount: Cents) -> Breakdown<'_> {
        let mut remaining = amount.get();
        let mut parts = Vec::new();
        for denomination in &self.sorted {
            let value = denomination.value().get();
            let count = remaining / value;
            remaining %= value;
            if count > 0 {
                parts.push((denomination, count));
            }
        }
        Breakdown {
            parts,
            remainder: Cents::new(remaining),
        }
    }

    /// Renders a display amount for humans.
    ///
    /// Without named denominations this is just `pattern` applied to the
    /// amount and the currency name. With them, the amount is broken down
    /// (`"3 Golds, 7 Irons"`), and whatever no denomination covers is
    /// rendered with `pattern`. Zero always renders the zero amount.
    ///
    /// # Errors
    ///
    /// Named mode fails for amounts [`Currency::to_cents`] rejects. Unnamed
    /// mode fails only for non-finite amounts.
    pub fn format(&self, pattern: &AmountPattern, display: f64) -> EconomyResult<String> {
        if !self.named_denominations {
            if !display.is_finite() {
                return Err(EconomyError::InvalidAmount(display.to_string()));
            }
            return Ok(pattern.render(display, self.name_for(display)));
        }

        let breakdown = self.breakdown(self.to_cents(display)?);
        let mut out = breakdown
            .parts()
            .iter()
            .map(|(denomination, count)| format!("{count} {}", denomination.unit_name_for(*count)))
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        if !breakdown.remainder().is_zero() || out.is_empty() {
            if !out.is_empty() {
                out.push_str(SEPARATOR);
            }
            let shown = self.to_display(breakdown.remainder());
            out.push_str(&pattern.render(shown, self.name_for(shown)));
        }

        Ok(out)
    }

    #[allow(clippy::float_cmp)]
    fn name_for(&self, display: f64) -> &str {
        if display == 1.0 {
            &self.name
        } else {
            &self.name_plural
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, denomination) in self.sorted.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{denomination}")?;
        }
        Ok(())
    }
}

/// Result of [`Currency::breakdown`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakdown<'a> {
    parts: Vec<(&'a Denomination, u64)>,
    remainder: Cents,
}

impl<'a> Breakdown<'a> {
    /// Denominations used and how many of each, highest value first.
    #[must_use]
    pub fn parts(&self) -> &[(&'a Denomination, u64)] {
        &self.parts
    }

    /// What no denomination could cover.
    #[must_use]
    pub const fn remainder(&self) -> Cents {
        self.remainder
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn display_to_cents(display: f64, unit: u64) -> EconomyResult<Cents> {
    if !display.is_finite() || display < 0.0 {
        return Err(EconomyError::InvalidAmount(display.to_string()));
    }
    // non-negative, so rounding half away from zero is rounding half up
    let scaled = (display * unit as f64).round();
    if scaled >= u64::MAX as f64 {
        return Err(EconomyError::ArithmeticOverflow);
    }
    Ok(Cents::new(scaled as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold() -> ItemDescriptor {
        ItemDescriptor::new("gold_ingot")
    }

    fn silver() -> ItemDescriptor {
        ItemDescriptor::new("iron_nugget")
    }

    fn shulker(contents: Vec<ItemStack>) -> ItemStack {
        ItemStack::container(ItemDescriptor::new("shulker_box"), contents)
    }

    fn create_test_currency(named: bool, containers: bool) -> Currency {
        let mut builder = Currency::builder("Coin", "Coins", 2)
            .unwrap()
            .with_named_denominations(named)
            .with_containers(containers)
            .with_container_kind("shulker_box");
        builder.register(&gold(), 1.0, "Gold", "Golds").unwrap();
        builder.register(&silver(), 0.01, "Silver", "Silvers").unwrap();
        builder
            .register(&ItemDescriptor::new("shulker_box"), 5.0, "Box", "Boxes")
            .unwrap();
        builder.build()
    }

    fn pattern() -> AmountPattern {
        "%.2f %s".parse().unwrap()
    }

    #[test]
    fn test_unit_from_digits() {
        assert_eq!(Currency::builder("a", "b", 0).unwrap().build().unit(), 1);
        assert_eq!(Currency::builder("a", "b", 3).unwrap().build().unit(), 1000);
        assert!(Currency::builder("a", "b", 19).is_err());
    }

    #[test]
    fn test_register_rejects_bad_values() {
        let mut builder = Currency::builder("Coin", "Coins", 2).unwrap();
        for bad in [-1.0, f64::NAN, f64::INFINITY, 0.0, 0.004] {
            assert!(
                matches!(
                    builder.register(&gold(), bad, "Gold", "Golds"),
                    Err(EconomyError::InvalidConfig(_))
                ),
                "value {bad} should be rejected"
            );
        }
        assert!(matches!(
            builder.register(&ItemDescriptor::empty(), 1.0, "Air", "Air"),
            Err(EconomyError::InvalidConfig(_))
        ));
        assert!(builder.denominations().is_empty());
    }

    #[test]
    fn test_register_overwrites_without_duplicates() {
        let mut builder = Currency::builder("Coin", "Coins", 2).unwrap();
        builder.register(&gold(), 1.0, "Gold", "Golds").unwrap();
        builder.register(&gold(), 2.5, "Gold", "Golds").unwrap();
        let currency = builder.build();
        assert_eq!(currency.denominations().len(), 1);
        assert_eq!(
            currency.denomination_of(&gold()).map(Denomination::value),
            Some(Cents::new(250))
        );
    }

    #[test]
    fn test_reregistration_moves_denomination_in_order() {
        let mut builder = Currency::builder("Coin", "Coins", 2).unwrap();
        builder.register(&gold(), 1.0, "Gold", "Golds").unwrap();
        builder.register(&silver(), 0.5, "Silver", "Silvers").unwrap();
        builder.register(&gold(), 0.1, "Gold", "Golds").unwrap();
        let values: Vec<u64> = builder.denominations().iter().map(|d| d.value().get()).collect();
        assert_eq!(values, [50, 10]);

        let currency = builder.build();
        assert_eq!(currency.denominations()[1].key(), &DenominationKey::from(&gold()));
        let pattern: AmountPattern = "%.2f %s".parse().unwrap();
        assert_eq!(currency.format(&pattern, 0.7).unwrap(), "0.70 Coins");
    }

    #[test]
    fn test_sorted_descending() {
        let mut builder = Currency::builder("Coin", "Coins", 2).unwrap();
        builder.register(&silver(), 0.01, "S", "S").unwrap();
        builder.register(&gold(), 1.0, "G", "G").unwrap();
        builder.register(&ItemDescriptor::new("diamond"), 10.0, "D", "D").unwrap();
        let values: Vec<u64> = builder.denominations().iter().map(|d| d.value().get()).collect();
        assert_eq!(values, [1000, 100, 1]);
    }

    #[test]
    fn test_value_of_registered_and_unknown() {
        let currency = create_test_currency(true, false);
        let stack = ItemStack::new(gold(), 12);
        assert_eq!(currency.value_of(Some(&stack)).unwrap(), Cents::new(1200));

        let dirt = ItemStack::new(ItemDescriptor::new("dirt"), 64);
        assert_eq!(currency.value_of(Some(&dirt)).unwrap(), Cents::ZERO);
        assert_eq!(currency.value_of(None).unwrap(), Cents::ZERO);
        assert_eq!(currency.value_of(Some(&ItemStack::empty())).unwrap(), Cents::ZERO);
    }

    #[test]
    fn test_variant_is_a_different_denomination() {
        let currency = create_test_currency(true, false);
        let renamed = ItemStack::new(gold().with_variant("Fool's Gold"), 3);
        assert_eq!(currency.value_of(Some(&renamed)).unwrap(), Cents::ZERO);
    }

    #[test]
    fn test_value_overflow_is_reported() {
        let mut builder = Currency::builder("Coin", "Coins", 0).unwrap();
        builder.register(&gold(), 1e18, "G", "G").unwrap();
        let currency = builder.build();
        let stack = ItemStack::new(gold(), 100);
        assert_eq!(
            currency.value_of(Some(&stack)),
            Err(EconomyError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_value_of_all_overflow_is_reported() {
        let mut builder = Currency::builder("Coin", "Coins", 0)
            .unwrap()
            .with_containers(true)
            .with_container_kind("shulker_box");
        builder.register(&gold(), 1e19, "G", "G").unwrap();
        let currency = builder.build();

        let one = ItemStack::new(gold(), 1);
        assert_eq!(
            currency.value_of(Some(&one)).unwrap(),
            Cents::new(10_000_000_000_000_000_000)
        );
        assert_eq!(
            currency.value_of_all(&[one.clone(), one.clone()]),
            Err(EconomyError::ArithmeticOverflow)
        );
        let boxed = shulker(vec![one.clone(), one]);
        assert_eq!(
            currency.value_of(Some(&boxed)),
            Err(EconomyError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_container_valued_by_contents() {
        let currency = create_test_currency(true, true);
        let boxed = shulker(vec![
            ItemStack::new(gold(), 2),
            ItemStack::empty(),
            ItemStack::new(silver(), 5),
        ]);
        assert_eq!(currency.value_of(Some(&boxed)).unwrap(), Cents::new(205));
    }

    #[test]
    fn test_container_flag_disabled_uses_own_denomination() {
        let currency = create_test_currency(true, false);
        let boxed = shulker(vec![ItemStack::new(gold(), 2)]);
        assert_eq!(currency.value_of(Some(&boxed)).unwrap(), Cents::new(500));
    }

    #[test]
    fn test_container_without_contents_is_a_plain_item() {
        let currency = create_test_currency(true, true);
        let closed = ItemStack::new(ItemDescriptor::new("shulker_box"), 2);
        assert_eq!(currency.value_of(Some(&closed)).unwrap(), Cents::new(1000));
    }

    #[test]
    fn test_container_depth_limit() {
        let mut builder = Currency::builder("Coin", "Coins", 2)
            .unwrap()
            .with_containers(true)
            .with_container_kind("shulker_box")
            .with_max_container_depth(2);
        builder.register(&gold(), 1.0, "Gold", "Golds").unwrap();
        let currency = builder.build();

        let two_deep = shulker(vec![shulker(vec![ItemStack::new(gold(), 1)])]);
        assert_eq!(currency.value_of(Some(&two_deep)).unwrap(), Cents::new(100));

        let three_deep = shulker(vec![two_deep]);
        assert_eq!(
            currency.value_of(Some(&three_deep)),
            Err(EconomyError::ContainerTooDeep { limit: 2 })
        );
    }

    #[test]
    fn test_value_of_all() {
        let currency = create_test_currency(true, true);
        let slots = vec![
            ItemStack::new(gold(), 3),
            ItemStack::new(ItemDescriptor::new("cobblestone"), 64),
            shulker(vec![ItemStack::new(silver(), 40)]),
        ];
        assert_eq!(currency.value_of_all(&slots).unwrap(), Cents::new(340));
    }

    #[test]
    fn test_to_cents_rounds_half_up() {
        let currency = create_test_currency(true, false);
        assert_eq!(currency.to_cents(3.07).unwrap(), Cents::new(307));
        assert_eq!(currency.to_cents(0.125).unwrap(), Cents::new(13));
        assert_eq!(currency.to_cents(0.004).unwrap(), Cents::ZERO);
        assert_eq!(currency.to_cents(0.0).unwrap(), Cents::ZERO);
    }

    #[test]
    fn test_to_cents_rejects_invalid() {
        let currency = create_test_currency(true, false);
        assert!(matches!(currency.to_cents(-0.5), Err(EconomyError::InvalidAmount(_))));
        assert!(matches!(currency.to_cents(f64::NAN), Err(EconomyError::InvalidAmount(_))));
        assert_eq!(currency.to_cents(1e30), Err(EconomyError::ArithmeticOverflow));
    }

    #[test]
    fn test_to_display() {
        let currency = create_test_currency(true, false);
        assert!((currency.to_display(Cents::new(307)) - 3.07).abs() < 1e-9);
    }

    #[test]
    fn test_format_named_breakdown() {
        let currency = create_test_currency(true, false);
        assert_eq!(currency.format(&pattern(), 3.07).unwrap(), "3 Golds, 7 Silvers");
        assert_eq!(currency.format(&pattern(), 1.01).unwrap(), "1 Gold, 1 Silver");
        assert_eq!(
            currency.format(&pattern(), 12.34).unwrap(),
            "2 Boxes, 2 Golds, 34 Silvers"
        );
    }

    #[test]
    fn test_format_zero_is_never_empty() {
        let currency = create_test_currency(true, false);
        assert_eq!(currency.format(&pattern(), 0.0).unwrap(), "0.00 Coins");
    }

    #[test]
    fn test_format_remainder_after_denominations() {
        let mut builder = Currency::builder("Coin", "Coins", 2)
            .unwrap()
            .with_named_denominations(true);
        builder.register(&gold(), 1.0, "Gold", "Golds").unwrap();
        let currency = builder.build();
        assert_eq!(currency.format(&pattern(), 2.5).unwrap(), "2 Golds, 0.50 Coins");
        assert_eq!(currency.format(&pattern(), 0.25).unwrap(), "0.25 Coins");
    }

    #[test]
    fn test_format_unnamed_uses_singular_for_one() {
        let currency = create_test_currency(false, false);
        assert_eq!(currency.format(&pattern(), 1.0).unwrap(), "1.00 Coin");
        assert_eq!(currency.format(&pattern(), 2.0).unwrap(), "2.00 Coins");
        assert_eq!(currency.format(&pattern(), -1.5).unwrap(), "-1.50 Coins");
        assert!(currency.format(&pattern(), f64::NAN).is_err());
    }

    #[test]
    fn test_format_unnamed_rounds_like_to_cents() {
        let currency = create_test_currency(false, false);
        assert_eq!(currency.to_cents(0.125).unwrap(), Cents::new(13));
        assert_eq!(currency.format(&pattern(), 0.125).unwrap(), "0.13 Coins");
        assert_eq!(currency.format(&pattern(), 2.675).unwrap(), "2.68 Coins");
        let whole: AmountPattern = "%.0f %s".parse().unwrap();
        assert_eq!(currency.format(&whole, 0.5).unwrap(), "1 Coins");
    }

    #[test]
    fn test_format_named_rejects_negative() {
        let currency = create_test_currency(true, false);
        assert!(matches!(
            currency.format(&pattern(), -1.0),
            Err(EconomyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_breakdown_parts() {
        let currency = create_test_currency(true, false);
        let breakdown = currency.breakdown(Cents::new(1234));
        let parts: Vec<(&str, u64)> = breakdown
            .parts()
            .iter()
            .map(|(d, n)| (d.unit_name(), *n))
            .collect();
        assert_eq!(parts, [("Box", 2), ("Gold", 2), ("Silver", 34)]);
        assert!(breakdown.remainder().is_zero());
    }

    #[test]
    fn test_currency_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Currency>();
    }

    #[test]
    fn test_display_lists_denominations() {
        let currency = create_test_currency(true, false);
        let text = currency.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("shulker_box: 500"));
    }
}
