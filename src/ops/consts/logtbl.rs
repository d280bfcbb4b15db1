//! Table of ln(t) - (t - 1) at the breakpoints t = 0.5 + (k + 26) / 128.

use crate::num::F128;

/// Index of the entry for t = 1.
pub(crate) const LOGTBL_ONE: usize = 38;

/// Entry k holds ln(t) - (t - 1), t = 0.5 + (k + 26) / 128, rounded to nearest.
pub(crate) const LOGTBL: [F128; 92] = [
    F128::from_bits(0xbffac5641f4e350a0d32756eba00bc34), // t = 90/128
    F128::from_bits(0xbffaaadeefacaf97d357dd6e688ebb14), // t = 91/128
    F128::from_bits(0xbffa9157039c51ebe708164c759686a2), // t = 92/128
    F128::from_bits(0xbffa78c6e138e20d831f698298adddd8), // t = 93/128
    F128::from_bits(0xbffa61293b9998c1daa5b035eae273a8), // t = 94/128
    F128::from_bits(0xbffa4a78f0e9ae71d852cdec34784708), // t = 95/128
    F128::from_bits(0xbffa34b1089a6dc93c1df5bb3b60554e), // t = 96/128
    F128::from_bits(0xbffa1fccb1ad35ca6ed5147bdb6ddcaf), // t = 97/128
    F128::from_bits(0xbffa0bc74113f23def19c5a0fe396f41), // t = 98/128
    F128::from_bits(0xbff9f138604d5862736c5bb53a44e1f4), // t = 99/128
    F128::from_bits(0xbff9cc8e3659d9bcbecca0cdf301431b), // t = 100/128
    F128::from_bits(0xbff9a9877ff388090913b020fa1820c9), // t = 101/128
    F128::from_bits(0xbff9881bf932af3dac0c524848e3443e), // t = 102/128
    F128::from_bits(0xbff968439c1dec568774d57da945b5d1), // t = 103/128
    F128::from_bits(0xbff949f69e456cf1b795f53bd2e406e6), // t = 104/128
    F128::from_bits(0xbff92d2d6e7b80bf9142c507fb7a3d0c), // t = 105/128
    F128::from_bits(0xbff911e0b2a8d1e0ddb9a631e830fd31), // t = 106/128
    F128::from_bits(0xbff8f0128b756abb9c8698f787a64ea2), // t = 107/128
    F128::from_bits(0xbff8bf406b543db1fb8292ecfc82062e), // t = 108/128
    F128::from_bits(0xbff8913d8333b560de553f6d9e1d9682), // t = 109/128
    F128::from_bits(0xbff865fcb01590162fa8234b72895951), // t = 110/128
    F128::from_bits(0xbff83d712a49c201a471fa7beb8a5ad0), // t = 111/128
    F128::from_bits(0xbff8178e8227e47bde338b41fc72de82), // t = 112/128
    F128::from_bits(0xbff7e89139dbd56594d82f7a81b1b252), // t = 113/128
    F128::from_bits(0xbff7a727638446a25007e9c5ccc062fb), // t = 114/128
    F128::from_bits(0xbff76ac88dad5b1bdff50225c6b4c1cc), // t = 115/128
    F128::from_bits(0xbff7335e5d594988ae1d5ea3eccd2509), // t = 116/128
    F128::from_bits(0xbff700d30aeac0e0f46d4cef69917d84), // t = 117/128
    F128::from_bits(0xbff6a622ba40fd58bb4fa163c2165ecf), // t = 118/128
    F128::from_bits(0xbff65409488e2f491751639682e04716), // t = 119/128
    F128::from_bits(0xbff60b316b3c740d1147fb37ea066e58), // t = 120/128
    F128::from_bits(0xbff596e79bbb65970db827d7f8816358), // t = 121/128
    F128::from_bits(0xbff52954293f66866a2fa5d98288f315), // t = 122/128
    F128::from_bits(0xbff49abb50b78fa63229080b5ec826e5), // t = 123/128
    F128::from_bits(0xbff40576279d1111c05cf1d753622278), // t = 124/128
    F128::from_bits(0xbff32494a3232afa2e6d2f9e6059928f), // t = 125/128
    F128::from_bits(0xbff202b2c49ac23a4f91d082dce3ddcd), // t = 126/128
    F128::from_bits(0xbff00157588de7128ccc5a82f9da00f5), // t = 127/128
    F128::from_bits(0x00000000000000000000000000000000), // t = 128/128
    F128::from_bits(0xbfeffd594ef987703c896fc6e23d7d2d), // t = 129/128
    F128::from_bits(0xbff1faba781fe0e183092c59642a1549), // t = 130/128
    F128::from_bits(0xbff31b93e0a93b955b602ace3a50ff89), // t = 131/128
    F128::from_bits(0xbff3f593c61f33fecc1c0fb0e10dd605), // t = 132/128
    F128::from_bits(0xbff485e118050a815bfa937f551bac6e), // t = 133/128
    F128::from_bits(0xbff5174e139a460773961abc236b4fa7), // t = 134/128
    F128::from_bits(0xbff57a451dcd1c827ae5d6704c12645b), // t = 135/128
    F128::from_bits(0xbff5eb9e7fdd3ab33d066d1d22299a1e), // t = 136/128
    F128::from_bits(0xbff6359222b90a3e2f3b47d18459b437), // t = 137/128
    F128::from_bits(0xbff67c50d3c85c5edaccf913df65d916), // t = 138/128
    F128::from_bits(0xbff6c9f181f3cf812db0e32f2ba0dd4f), // t = 139/128
    F128::from_bits(0xbff70f2d751a94b4641b664612e649bf), // t = 140/128
    F128::from_bits(0xbff73cba29ce64df0a534bd59a1254bd), // t = 141/128
    F128::from_bits(0xbff76d92c5b52a9c9af42dd563c55b38), // t = 142/128
    F128::from_bits(0xbff7a1ab70a438bcea29e8107e9e4e89), // t = 143/128
    F128::from_bits(0xbff7d8f891d50d1a161578001e0161eb), // t = 144/128
    F128::from_bits(0xbff809b767120aa2aae8d7330366d8e2), // t = 145/128
    F128::from_bits(0xbff82881832f71a699688e85bf3d5172), // t = 146/128
    F128::from_bits(0xbff848d52ad0985fd6f9fb971a6518c1), // t = 147/128
    F128::from_bits(0xbff86aad07e00adcb3fa238efe090597), // t = 148/128
    F128::from_bits(0xbff88e03dfe1708bc432693aa1cec069), // t = 149/128
    F128::from_bits(0xbff8b2d4933482e1982c26af0781e1f4), // t = 150/128
    F128::from_bits(0xbff8d91a1c5e4bc85d1bfe291c34e659), // t = 151/128
    F128::from_bits(0xbff90067c7ac36161bc60efafc6f6e23), // t = 152/128
    F128::from_bits(0xbff914f80c7316f1b955c4d1d9a2f21d), // t = 153/128
    F128::from_bits(0xbff92a3b7ef7937b720e4a694afcfbfd), // t = 154/128
    F128::from_bits(0xbff9402fcd6f9b77b7effb7f411b3443), // t = 155/128
    F128::from_bits(0xbff956d2b185d4a5c4df67c563a3b4c5), // t = 156/128
    F128::from_bits(0xbff96e21f00ea54e73647727c2b339ec), // t = 157/128
    F128::from_bits(0xbff9861b58bfa0069398cff36419851a), // t = 158/128
    F128::from_bits(0xbff99ebcc5e93994eb0318bb78f0ab0f), // t = 159/128
    F128::from_bits(0xbff9b8041c32b2ef29ed13f08680232f), // t = 160/128
    F128::from_bits(0xbff9d1ef4a5822375237794d03657fc8), // t = 161/128
    F128::from_bits(0xbff9ec7c48ea868d0b0abc000f00b0f5), // t = 162/128
    F128::from_bits(0xbffa03d48d08e9b26b79c86af23df37b), // t = 163/128
    F128::from_bits(0xbffa11b9e4a870755caaae64f21acb4d), // t = 164/128
    F128::from_bits(0xbffa1fed35a597df928ec217a5022d43), // t = 165/128
    F128::from_bits(0xbffa2e6d8ec6378e5046042ff3c7f9e4), // t = 166/128
    F128::from_bits(0xbffa3d3a0328da9573b02faa59a67184), // t = 167/128
    F128::from_bits(0xbffa4c51aa2a2cf8fe319c15477c8e90), // t = 168/128
    F128::from_bits(0xbffa5bb39f4b3302821cb8c55fe38888), // t = 169/128
    F128::from_bits(0xbffa6b5f0218434d2edebd612c515e68), // t = 170/128
    F128::from_bits(0xbffa7b52f610bcae50a5b67d81f7e34f), // t = 171/128
    F128::from_bits(0xbffa8b8ea28f7167b1e99b72bd7bf262), // t = 172/128
    F128::from_bits(0xbffa9c1132b3c15594dd4c580919f784), // t = 173/128
    F128::from_bits(0xbffaacd9d54b5d0b1c68651945f97b90), // t = 174/128
    F128::from_bits(0xbffabde7bcbcac0e2179f6c1059cdacf), // t = 175/128
    F128::from_bits(0xbffacf3a1ef1d09ec17a42642661c65e), // t = 176/128
    F128::from_bits(0xbffae0d0354443af9259b35b04813cdc), // t = 177/128
    F128::from_bits(0xbffaf2a93c6903e97b1b614f982a873c), // t = 178/128
    F128::from_bits(0xbffb02623a2ea964ead9524d7c99f430), // t = 179/128
    F128::from_bits(0xbffb0b909029fd8d6bdc9c7c23801eea), // t = 180/128
    F128::from_bits(0xbffb14df43518e1ab4242837567f8d74), // t = 181/128
];

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_logtbl() {
        assert!(LOGTBL[LOGTBL_ONE].is_zero());

        // ln(t) - (t - 1) < 0 for t != 1, and the magnitude grows away from t = 1
        for (k, v) in LOGTBL.iter().enumerate() {
            if k != LOGTBL_ONE {
                assert!(v.is_negative() && !v.is_zero());
            }
        }

        for k in 1..LOGTBL_ONE {
            assert!(LOGTBL[k - 1].abs().to_bits() > LOGTBL[k].abs().to_bits());
        }

        for k in LOGTBL_ONE + 1..LOGTBL.len() {
            assert!(LOGTBL[k - 1].abs().to_bits() < LOGTBL[k].abs().to_bits());
        }
    }
}
