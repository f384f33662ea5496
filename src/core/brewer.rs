use crate::core::{Beverage, BrewEvent, NotificationSink, Receipt, Step};
use crate::utils::error::Result;

/// Runs the fixed brewing skeleton once: boil, brew, pour, ask, and add sugar
/// only when the hook says so.
pub fn prepare<B, S>(beverage: &mut B, sink: &mut S) -> Result<Receipt>
where
    B: Beverage + ?Sized,
    S: NotificationSink + ?Sized,
{
    let mut events = Vec::with_capacity(5);

    emit(sink, &mut events, Step::BoilWater, beverage.boil_water())?;
    emit(sink, &mut events, Step::Brew, beverage.brew())?;
    emit(sink, &mut events, Step::PourInCup, beverage.pour_in_cup())?;

    let sugar_added = beverage.customer_wants_sugar()?;
    let answer = if sugar_added { "加糖？是" } else { "加糖？否" };
    emit(sink, &mut events, Step::Decide, answer)?;

    if sugar_added {
        emit(sink, &mut events, Step::AddSugar, beverage.add_sugar())?;
    }

    Ok(Receipt {
        beverage: beverage.name().to_string(),
        sugar_added,
        events,
    })
}

fn emit<S: NotificationSink + ?Sized>(
    sink: &mut S,
    events: &mut Vec<BrewEvent>,
    step: Step,
    message: &str,
) -> Result<()> {
    tracing::debug!("Running step: {}", step);
    let event = BrewEvent::new(step, message);
    sink.notify(&event)?;
    events.push(event);
    Ok(())
}

pub struct BrewEngine<B: Beverage, S: NotificationSink> {
    beverage: B,
    sink: S,
}

impl<B: Beverage, S: NotificationSink> BrewEngine<B, S> {
    pub fn new(beverage: B, sink: S) -> Self {
        Self { beverage, sink }
    }

    pub fn init(&mut self) -> Result<Receipt> {
        tracing::debug!("Preparing {}", self.beverage.name());
        let receipt = prepare(&mut self.beverage, &mut self.sink)?;
        tracing::info!(
            "Served {} (sugar: {})",
            receipt.beverage,
            if receipt.sugar_added { "yes" } else { "no" }
        );
        Ok(receipt)
    }

    /// Brews `cups` cups one after another, each a full run of the skeleton.
    pub fn serve(&mut self, cups: usize) -> Result<Vec<Receipt>> {
        let mut receipts = Vec::with_capacity(cups);
        for cup in 1..=cups {
            tracing::debug!("Cup {}/{}", cup, cups);
            receipts.push(self.init()?);
        }
        Ok(receipts)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (B, S) {
        (self.beverage, self.sink)
    }
}
