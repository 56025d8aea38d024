use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputEvent, InputState},
    switch::Switch,
    v_flex,
};
use tax_core::TaxCalculator;
use tracing::{debug, trace};

use crate::models::TaxFormModel;

/// The calculator form: bill amount, tax percentage, round-up switch and
/// the resulting tax label.
///
/// Every input change or switch toggle marks the view dirty, and the label
/// is recomputed from the current values on the next render.
pub struct TaxForm {
    amount: Entity<InputState>,
    tax_percent: Entity<InputState>,
    round_up: bool,
    calculator: TaxCalculator,
    _subscriptions: Vec<Subscription>,
}

impl TaxForm {
    pub fn new(
        calculator: TaxCalculator,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let amount = make_number_input("Amount", window, cx);
        let tax_percent = make_number_input("Amount", window, cx);

        let _subscriptions = vec![
            cx.subscribe_in(&amount, window, Self::on_input_event),
            cx.subscribe_in(&tax_percent, window, Self::on_input_event),
        ];

        Self {
            amount,
            tax_percent,
            round_up: false,
            calculator,
            _subscriptions,
        }
    }

    /// Collects the current form values into a [`TaxFormModel`].
    pub fn to_model(
        &self,
        cx: &App,
    ) -> TaxFormModel {
        TaxFormModel::new(
            self.amount.read(cx).value().as_str(),
            self.tax_percent.read(cx).value().as_str(),
            self.round_up,
        )
    }

    fn on_input_event(
        &mut self,
        _state: &Entity<InputState>,
        event: &InputEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change = event {
            cx.notify();
        }
    }

    fn set_round_up(
        &mut self,
        round_up: bool,
        cx: &mut Context<Self>,
    ) {
        debug!(round_up, "round up toggled");
        self.round_up = round_up;
        cx.notify();
    }
}

impl Render for TaxForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let model = self.to_model(cx);
        let label = model.tax_label(&self.calculator);
        trace!(%model, %label, "tax form render");

        v_flex()
            .size_full()
            .px(px(40.))
            .gap_4()
            .child(div().pt(px(40.)).pb(px(16.)).child("Calculate Tax"))
            .child(make_input_row(&self.amount, "Bill Amount"))
            .child(make_input_row(&self.tax_percent, "Tax Percentage"))
            .child(
                make_labeled_row("Round up tax?").child(
                    h_flex().flex_grow().justify_end().child(
                        Switch::new("round-up")
                            .checked(self.round_up)
                            .on_click(cx.listener(|this, checked: &bool, _, cx| {
                                this.set_round_up(*checked, cx);
                            })),
                    ),
                ),
            )
            .child(
                div()
                    .pt(px(16.))
                    .text_2xl()
                    .child(SharedString::from(label)),
            )
    }
}

fn make_number_input(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<TaxForm>,
) -> Entity<InputState> {
    cx.new(|input_cx| InputState::new(window, input_cx).placeholder(placeholder.into()))
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Common row container: a right-aligned label followed by the control.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(150.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
