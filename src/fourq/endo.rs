// Endomorphisms phi and psi on FourQ.
//
// Both maps go through the isogenous curve Ehat: tau maps E to Ehat,
// tau_dual maps back, and the actual endomorphism is applied on Ehat
// (delphidel for phi, delpsidel for psi). On the prime-order subgroup,
// phi and psi act as multiplication by the eigenvalues LAMBDA_PHI and
// LAMBDA_PSI, respectively.

#![allow(non_snake_case)]

use super::PointExt;
use crate::field::GF254;

const CTAU1: GF254 = GF254::w64le(
    0x74DCD57CEBCE74C3, 0x1964DE2C3AFAD20C, 0x0000000000000012, 0x000000000000000C);
const CTAUDUAL1: GF254 = GF254::w64le(
    0x9ECAA6D9DECDF034, 0x4AA740EB23058652, 0x0000000000000011, 0x7FFFFFFFFFFFFFF4);

const CPHI0: GF254 = GF254::w64le(
    0xFFFFFFFFFFFFFFF7, 0x0000000000000005, 0x4F65536CEF66F81A, 0x2553A0759182C329);
const CPHI1: GF254 = GF254::w64le(
    0x0000000000000007, 0x0000000000000005, 0x334D90E9E28296F9, 0x62C8CAA0C50C62CF);
const CPHI2: GF254 = GF254::w64le(
    0x0000000000000015, 0x000000000000000F, 0x2C2CB7154F1DF391, 0x78DF262B6C9B5C98);
const CPHI3: GF254 = GF254::w64le(
    0x0000000000000003, 0x0000000000000002, 0x92440457A7962EA4, 0x5084C6491D76342A);
const CPHI4: GF254 = GF254::w64le(
    0x0000000000000003, 0x0000000000000003, 0xA1098C923AEC6855, 0x12440457A7962EA4);
const CPHI5: GF254 = GF254::w64le(
    0x000000000000000F, 0x000000000000000A, 0x669B21D3C5052DF3, 0x459195418A18C59E);
const CPHI6: GF254 = GF254::w64le(
    0x0000000000000018, 0x0000000000000012, 0xCD3643A78A0A5BE7, 0x0B232A8314318B3C);
const CPHI7: GF254 = GF254::w64le(
    0x0000000000000023, 0x0000000000000018, 0x66C183035F48781A, 0x3963BC1C99E2EA1A);
const CPHI8: GF254 = GF254::w64le(
    0x00000000000000F0, 0x00000000000000AA, 0x44E251582B5D0EF0, 0x1F529F860316CBE5);
const CPHI9: GF254 = GF254::w64le(
    0x0000000000000BEF, 0x0000000000000870, 0x014D3E48976E2505, 0x0FD52E9CFE00375B);

const CPSI1: GF254 = GF254::w64le(
    0xEDF07F4767E346EF, 0x2AF99E9A83D54A02, 0x000000000000013A, 0x00000000000000DE);
const CPSI2: GF254 = GF254::w64le(
    0x0000000000000143, 0x00000000000000E4, 0x4C7DEB770E03F372, 0x21B8D07B99A81F03);
const CPSI3: GF254 = GF254::w64le(
    0x0000000000000009, 0x0000000000000006, 0x3A6E6ABE75E73A61, 0x4CB26F161D7D6906);
const CPSI4: GF254 = GF254::w64le(
    0xFFFFFFFFFFFFFFF6, 0x7FFFFFFFFFFFFFF9, 0xC59195418A18C59E, 0x334D90E9E28296F9);

impl PointExt {

    // E -> Ehat. Only X, Y and Z are used and set.
    fn set_tau(&mut self) {
        let t0 = self.X.square();
        let t1 = self.Y.square();
        let XY = self.X * self.Y;
        let Z2 = self.Z.square();
        let Z = t0 + t1;
        let t0 = t1 - t0;
        self.X = XY * t0 * CTAU1;
        self.Y = (Z2.mul2() - t0) * Z;
        self.Z = Z * t0;
    }

    // Ehat -> E. The output is a complete extended point (Ta and Tb
    // are set).
    fn set_tau_dual(&mut self) {
        let t0 = self.X.square();
        let Z2 = self.Z.square();
        let t1 = self.Y.square();
        self.Ta = t1 - t0;
        let t0 = t0 + t1;
        let Z = Z2.mul2() - self.Ta;
        self.Tb = self.X * self.Y * CTAUDUAL1;
        self.Y = Z * self.Ta;
        self.X = self.Tb * t0;
        self.Z = Z * t0;
    }

    // phi on Ehat (through the Weierstrass model).
    fn set_delphidel(&mut self) {
        let t4 = self.Z.square();
        let t3 = self.Y * self.Z;
        let t0 = t4 * CPHI4;
        let t2 = self.Y.square();
        let t0 = t0 + t2;
        let t1 = t3 * CPHI3;
        let t5 = t0 - t1;
        let t0 = (t0 + t1) * self.Z * t5;
        let t1 = t3 * CPHI1;
        let t5 = t2 + t4 * CPHI2;
        let t6 = (t1 - t5) * (t1 + t5) * CPHI0;
        let X = self.X * t6;

        let t6 = t2.square();
        let t2 = t3.square();
        let t3 = t4.square();
        let t1 = t2 * CPHI8 + t6 + t3 * CPHI9;
        let t2 = t2 * CPHI6 + t3 * CPHI7;
        let t1 = t1 * self.Y;
        let Y = (t6 + t2) * CPHI5;

        // Outputs are raised to the power p (conjugated).
        self.X = (X * t1).conj();
        self.Y = (Y * self.Z * t0).conj();
        self.Z = (t0 * t1).conj();
    }

    // psi on Ehat (through the Weierstrass model).
    fn set_delpsidel(&mut self) {
        let X = self.X.conj();
        let Y = self.Y.conj();
        let Z = self.Z.conj();
        let t2 = Z.square();
        let t0 = X.square();
        let X = X * t2;
        let Z = t0 + t2 * CPSI2;
        let t1 = t0 + t2 * CPSI3;
        let t2 = -(t0 + t2 * CPSI4);
        let Z = Z * Y;
        self.X = X * t2 * CPSI1;
        self.Y = t1 * Z;
        self.Z = Z * t2;
    }

    /// Applies the endomorphism phi (in place).
    pub(crate) fn set_phi(&mut self) {
        self.set_tau();
        self.set_delphidel();
        self.set_tau_dual();
    }

    /// Applies the endomorphism psi (in place).
    pub(crate) fn set_psi(&mut self) {
        self.set_tau();
        self.set_delpsidel();
        self.set_tau_dual();
    }
}
