use crate::domain::model::BrewEvent;
use crate::utils::error::Result;

/// The extension points of the brewing skeleton.
///
/// `brew`, `pour_in_cup` and `add_sugar` have no default, so a variant that
/// leaves one out does not compile:
///
/// ```compile_fail,E0046
/// use beverage_template::Beverage;
///
/// struct Tea;
///
/// impl Beverage for Tea {
///     fn pour_in_cup(&self) -> &str {
///         "把茶倒進杯子"
///     }
///
///     fn add_sugar(&self) -> &str {
///         "加檸檬"
///     }
/// }
/// ```
///
/// The step order itself lives in [`crate::core::brewer::prepare`], outside the
/// trait, so no variant can reorder it.
pub trait Beverage {
    fn name(&self) -> &str {
        "beverage"
    }

    fn boil_water(&self) -> &str {
        "把水煮沸"
    }

    fn brew(&self) -> &str;

    fn pour_in_cup(&self) -> &str;

    fn add_sugar(&self) -> &str;

    /// Hook consulted once per run, after pouring. Defaults to always adding sugar.
    fn customer_wants_sugar(&mut self) -> Result<bool> {
        Ok(true)
    }
}

pub trait NotificationSink {
    fn notify(&mut self, event: &BrewEvent) -> Result<()>;
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, event: &BrewEvent) -> Result<()> {
        (**self).notify(event)
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, event: &BrewEvent) -> Result<()> {
        (**self).notify(event)
    }
}

/// Source of the yes/no answer behind [`Beverage::customer_wants_sugar`].
pub trait SugarDecider {
    fn decide(&mut self) -> Result<bool>;
}

impl<D: SugarDecider + ?Sized> SugarDecider for &mut D {
    fn decide(&mut self) -> Result<bool> {
        (**self).decide()
    }
}

impl<D: SugarDecider + ?Sized> SugarDecider for Box<D> {
    fn decide(&mut self) -> Result<bool> {
        (**self).decide()
    }
}
