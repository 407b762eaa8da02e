use codspeed_criterion_compat::{
    black_box, criterion_group, criterion_main, Criterion,
};
use crosspad_pad::{Button, ButtonSet, DPad, PadButtons};

pub fn bench_button_mask_ops(c: &mut Criterion) {
    let held = [
        Button::A,
        Button::LeftShoulder,
        Button::DPadLeft,
        Button::LeftThumbstickUp,
    ];

    c.bench_function("button_mask_roundtrip", |b| {
        b.iter(|| {
            let mask = ButtonSet::new(&held);
            let buttons = PadButtons::new(mask);
            black_box(buttons.a());
            black_box(buttons.left_shoulder());
            let dpad = DPad::from_mask(mask);
            black_box(dpad.left);
        })
    });
}

criterion_group!(benches, bench_button_mask_ops);
criterion_main!(benches);
