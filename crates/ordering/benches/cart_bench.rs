use chrono::{NaiveDate, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use ordering::{Cart, CartLine, Customer, CustomerId, Money, NewCustomer, OrderAssembler};

const COLORS: [&str; 4] = ["White", "Black", "Navy", "Grey"];
const SIZES: [&str; 6] = ["7", "8", "9", "10", "11", "12"];

fn line(color: &str, size: &str, quantity: u32) -> CartLine {
    CartLine::new(
        "prod-bench",
        "N9000 Premium",
        "N9000-001",
        color,
        size,
        quantity,
        Money::from_units(120),
    )
    .unwrap()
}

fn full_cart() -> Cart {
    let mut cart = Cart::new();
    for color in COLORS {
        for size in SIZES {
            cart.add(line(color, size, 2));
        }
    }
    cart
}

fn bench_add_distinct(c: &mut Criterion) {
    c.bench_function("cart/add_full_matrix", |b| {
        b.iter(full_cart);
    });
}

fn bench_add_merge(c: &mut Criterion) {
    let mut cart = full_cart();
    c.bench_function("cart/add_merge_last_line", |b| {
        b.iter(|| cart.add(line("Grey", "12", 1)));
    });
}

fn bench_totals(c: &mut Criterion) {
    let cart = full_cart();
    c.bench_function("cart/total_amount", |b| {
        b.iter(|| cart.total_amount());
    });
}

fn bench_assemble(c: &mut Criterion) {
    let cart = full_cart();
    let customer = Customer::register(
        CustomerId::new(),
        "bench".into(),
        NewCustomer {
            company_name: "Bench Co".to_string(),
            contact_person: "Bench".to_string(),
            phone: "000".to_string(),
            email: "bench@bench.example".to_string(),
            delivery_address: "Bench St".to_string(),
            billing_address: "Bench St".to_string(),
            special_instructions: None,
        },
        Utc::now(),
    )
    .unwrap();
    let delivery = NaiveDate::from_ymd_opt(2999, 1, 1);
    let assembler = OrderAssembler::new();

    c.bench_function("order/assemble_full_cart", |b| {
        b.iter(|| {
            assembler
                .assemble(Some(&customer), cart.lines(), delivery)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_add_distinct,
    bench_add_merge,
    bench_totals,
    bench_assemble
);
criterion_main!(benches);
