use anyhow::Result;
use beverage_template::{
    decider_fn, prepare, Beverage, BrewEngine, FixedDecider, MemorySink, Step, SugarDecider,
};

/// 只實作必要步驟，沿用預設的加糖判斷
struct PlainTea;

impl Beverage for PlainTea {
    fn name(&self) -> &str {
        "tea"
    }

    fn brew(&self) -> &str {
        "用沸水浸泡茶葉"
    }

    fn pour_in_cup(&self) -> &str {
        "把茶倒進杯子"
    }

    fn add_sugar(&self) -> &str {
        "加檸檬"
    }
}

/// 加糖判斷交給注入的決策來源
struct HookedTea<D: SugarDecider> {
    decider: D,
}

impl<D: SugarDecider> Beverage for HookedTea<D> {
    fn brew(&self) -> &str {
        "用沸水浸泡茶葉"
    }

    fn pour_in_cup(&self) -> &str {
        "把茶倒進杯子"
    }

    fn add_sugar(&self) -> &str {
        "加檸檬"
    }

    fn customer_wants_sugar(&mut self) -> beverage_template::Result<bool> {
        self.decider.decide()
    }
}

fn notification_steps(sink: &MemorySink) -> Vec<Step> {
    sink.steps()
        .into_iter()
        .filter(|step| *step != Step::Decide)
        .collect()
}

#[test]
fn test_hook_false_serves_three_notifications() -> Result<()> {
    let mut tea = HookedTea {
        decider: FixedDecider(false),
    };
    let mut sink = MemorySink::new();

    let receipt = prepare(&mut tea, &mut sink)?;

    assert!(!receipt.sugar_added);
    assert_eq!(
        notification_steps(&sink),
        vec![Step::BoilWater, Step::Brew, Step::PourInCup]
    );
    assert_eq!(sink.count(Step::AddSugar), 0);
    assert_eq!(sink.count(Step::Decide), 1);
    Ok(())
}

#[test]
fn test_hook_true_serves_four_notifications_in_order() -> Result<()> {
    let mut tea = HookedTea {
        decider: FixedDecider(true),
    };
    let mut sink = MemorySink::new();

    let receipt = prepare(&mut tea, &mut sink)?;

    assert!(receipt.sugar_added);
    assert_eq!(
        notification_steps(&sink),
        vec![Step::BoilWater, Step::Brew, Step::PourInCup, Step::AddSugar]
    );
    let messages: Vec<&str> = sink.events().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["把水煮沸", "用沸水浸泡茶葉", "把茶倒進杯子", "加糖？是", "加檸檬"]
    );
    Ok(())
}

#[test]
fn test_default_hook_always_adds_sugar() -> Result<()> {
    let mut engine = BrewEngine::new(PlainTea, MemorySink::new());

    let receipts = engine.serve(10)?;

    assert!(receipts.iter().all(|r| r.sugar_added));
    assert!(receipts.iter().all(|r| r.beverage == "tea"));
    assert_eq!(engine.sink().count(Step::AddSugar), 10);
    Ok(())
}

#[test]
fn test_decision_is_taken_once_after_pouring() -> Result<()> {
    let mut sink = MemorySink::new();
    let mut calls = 0;
    let mut tea = HookedTea {
        decider: decider_fn(|| {
            calls += 1;
            true
        }),
    };

    prepare(&mut tea, &mut sink)?;
    drop(tea);

    assert_eq!(calls, 1);
    let steps = sink.steps();
    let pour = steps.iter().position(|s| *s == Step::PourInCup).unwrap();
    let decide = steps.iter().position(|s| *s == Step::Decide).unwrap();
    let sugar = steps.iter().position(|s| *s == Step::AddSugar).unwrap();
    assert!(pour < decide && decide < sugar);
    Ok(())
}

#[test]
fn test_skeleton_order_holds_for_every_answer() -> Result<()> {
    for wants_sugar in [true, false] {
        let mut tea = HookedTea {
            decider: FixedDecider(wants_sugar),
        };
        let mut sink = MemorySink::new();
        let receipt = prepare(&mut tea, &mut sink)?;

        assert_eq!(sink.count(Step::BoilWater), 1);
        assert_eq!(&receipt.steps()[..3], &[Step::BoilWater, Step::Brew, Step::PourInCup]);
        assert_eq!(sink.count(Step::AddSugar) == 1, wants_sugar);
    }
    Ok(())
}
