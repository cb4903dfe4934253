#![allow(non_snake_case)]

mod util;
use util::core_cycles;

use fourq::field::GF254;
use fourq::fourq::Point;
use fourq::scalar::Scalar;
use fourq::{ecdh, schnorrq};

fn seed32() -> [u8; 32] {
    let z = core_cycles();
    let mut b = [0u8; 32];
    b[ 0.. 8].copy_from_slice(&z.to_le_bytes());
    b[ 8..16].copy_from_slice(&z.wrapping_mul(3).to_le_bytes());
    b[16..24].copy_from_slice(&z.wrapping_mul(5).to_le_bytes());
    b[24..32].copy_from_slice(&z.wrapping_mul(7).to_le_bytes());
    b
}

fn bench_gf254_mul() {
    let z = core_cycles();
    let mut x = GF254::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut y = x + GF254::ONE;
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x *= y;
            y *= x;
            x *= y;
            y *= x;
            x *= y;
            y *= x;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF254 mul:            {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode32()[0]);
}

fn bench_gf254_square() {
    let z = core_cycles();
    let mut x = GF254::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        x.set_xsquare(6000);
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF254 square:         {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode32()[0]);
}

fn bench_gf254_invert() {
    let z = core_cycles();
    let mut x = GF254::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x.set_invert();
            x += GF254::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF254 invert:         {:11.2}  ({})", (tt[4] as f64) / 1000.0, x.encode32()[0]);
}

fn bench_mul() -> (f64, u8) {
    let mut P = Point::mulgen(&Scalar::decode_reduce(&seed32()));
    let mut n = Scalar::decode_reduce(&seed32());
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            P *= n;
            n += Scalar::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, P.encode()[0])
}

fn bench_mulgen() -> (f64, u8) {
    let mut n = Scalar::decode_reduce(&seed32());
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let P = Point::mulgen(&n);
            n = Scalar::decode_reduce(&P.encode());
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, n.encode32()[0])
}

fn bench_mul_add_mulgen() -> (f64, u8) {
    let P = Point::mulgen(&Scalar::decode_reduce(&seed32()));
    let mut u = Scalar::decode_reduce(&seed32());
    let mut v = u + Scalar::ONE;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let Q = P.mul_add_mulgen_vartime(&u, &v).unwrap();
            let e = Q.encode();
            u = Scalar::decode_reduce(&e);
            v = u + Scalar::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, u.encode32()[0])
}

fn bench_schnorrq_sign() -> (f64, u8) {
    let sk = seed32();
    let pk = schnorrq::keygen(&sk);
    let mut msg = [0u8; 32];
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let sig = schnorrq::sign(&sk, &pk, &msg).unwrap();
            msg.copy_from_slice(&sig[..32]);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, msg[0])
}

fn bench_schnorrq_verify() -> (f64, u8) {
    let sk = seed32();
    let pk = schnorrq::keygen(&sk);
    let mut sigs = [[0u8; 64]; 8];
    for j in 0..sigs.len() {
        sigs[j] = schnorrq::sign(&sk, &pk, &[j as u8]).unwrap();
    }
    let mut x = 0u8;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for k in 0..100 {
            let j = (k + (x as usize)) & 7;
            if schnorrq::verify(&pk, &[j as u8], &sigs[j]).unwrap() {
                x = x.wrapping_add(1);
            }
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, x)
}

fn bench_ecdh() -> (f64, u8) {
    let mut sk = seed32();
    let pk = ecdh::public_key(&seed32());
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            sk = ecdh::shared_secret(&sk, &pk).unwrap();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[tt.len() >> 1] as f64) / 100.0, sk[0])
}

fn main() {
    bench_gf254_mul();
    bench_gf254_square();
    bench_gf254_invert();

    let mut bx = 0u8;

    let (v, x) = bench_mul();
    bx ^= x;
    println!("FourQ point mul:               {:13.2}", v);
    let (v, x) = bench_mulgen();
    bx ^= x;
    println!("FourQ point mulgen:            {:13.2}", v);
    let (v, x) = bench_mul_add_mulgen();
    bx ^= x;
    println!("FourQ mul_add_mulgen_vartime:  {:13.2}", v);
    let (v, x) = bench_schnorrq_sign();
    bx ^= x;
    println!("SchnorrQ sign:                 {:13.2}", v);
    let (v, x) = bench_schnorrq_verify();
    bx ^= x;
    println!("SchnorrQ verify:               {:13.2}", v);
    let (v, x) = bench_ecdh();
    bx ^= x;
    println!("ECDH shared secret:            {:13.2}", v);

    println!("{}", bx);
}
