//! Coefficients of the polynomial approximating (ln(1 + z) - z + z^2 / 2) / z^3 for |z| <= 1/128.

use crate::num::F128;

/// Coefficients from the degree 15 term down to the degree 3 term.
pub(crate) const LN_POLY: [F128; 13] = [
    F128::from_bits(0x3ffb111fa6cd0a24f18cc4d616b52fe2), // 6.668057591071739754844678883223432347481e-2
    F128::from_bits(0xbffb24a0d09d6df5307cefa7dce419cb), // -7.144242754190814657241902218399056829264e-2
    F128::from_bits(0x3ffb3b13b0e015df952586ea703c0a32), // 7.692307559897661630807048686258659316091e-2
    F128::from_bits(0xbffb55555501d4242abc4cd1817a9e2a), // -8.333333211818065121250921925397567745734e-2
    F128::from_bits(0x3ffb745d1745d297fca77d048b595aee), // 9.090909090915566247008015301349979892689e-2
    F128::from_bits(0xbffb999999999a89a16d45e032b400df), // -1.000000000000532974938900317952530453248e-1
    F128::from_bits(0x3ffbc71c71c71c71c521dfbadaa44000), // 1.111111111111111093947834982832456459186e-1
    F128::from_bits(0xbffbfffffffffffffe9a6b0bcc1095b3), // -1.249999999999999987884655626377588149000e-1
    F128::from_bits(0x3ffc24924924924924924a0a48ba103f), // 1.428571428571428571428808945895490721564e-1
    F128::from_bits(0xbffc555555555555555555d4c8e6392d), // -1.666666666666666666666798448356171665678e-1
    F128::from_bits(0x3ffc99999999999999999999993b7e9b), // 1.999999999999999999999999998515277861905e-1
    F128::from_bits(0xbffcffffffffffffffffffffffdf79b7), // -2.499999999999999999999999999486853077002e-1
    F128::from_bits(0x3ffd555555555555555555555555555b), // 3.333333333333333333333333333333336096926e-1
];
