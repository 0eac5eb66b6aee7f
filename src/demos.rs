//! Scenario runners shared by the binaries and the integration tests.

use crate::arith::ArithHost;
use crate::calc::{CalcDemo, Plus, Times};
use crate::capability::{First, Second};
use crate::config::{BasicConfig, CalcConfig};
use crate::demo::Demo;
use crate::sink::Sink;

/// Binds one host to `First` and one to `Second`, and lets each speak.
pub fn run_basic_dip(config: &BasicConfig, sink: &mut dyn Sink) {
    let mut demo1 = Demo::<First>::new();
    demo1.set_token(config.first);
    demo1.say_it_to(sink);

    let mut demo2 = Demo::<Second>::new();
    demo2.set_token(config.second);
    demo2.say_it_to(sink);
}

/// Runs both calculator hosts, then the stateless arithmetic host.
pub fn run_generic_dip(config: &CalcConfig, sink: &mut dyn Sink) {
    let [a, b] = config.plus;
    let mut demo1 = CalcDemo::<Plus<i32>, i32>::new();
    let tmou = demo1.do_calc(a, b);
    sink.emit(&format!("The meaning of the universe is {tmou}"));
    sink.emit(&format!("saved result: {}", demo1.get_result()));

    let [x, y] = config.times;
    let mut demo2 = CalcDemo::<Times<f64>, f64>::new();
    let some_number = demo2.do_calc(x, y);
    sink.emit(&format!("some-number = {some_number}"));
    sink.emit(&format!("saved result: {}", demo2.get_result()));

    let ints = ArithHost::<i32>::new();
    sink.emit(&format!("plus({a}, {b}) = {}", ints.plus(a, b)));
    sink.emit(&format!("times({a}, {b}) = {}", ints.times(a, b)));

    let floats = ArithHost::<f64>::new();
    sink.emit(&format!("plus({x}, {y}) = {}", floats.plus(x, y)));
    sink.emit(&format!("times({x}, {y}) = {}", floats.times(x, y)));
}
