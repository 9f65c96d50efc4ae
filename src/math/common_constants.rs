//! Lookup tables shared by the exponential and logarithm kernels.
//!
//! Entries are stored as raw binary64 bit patterns and read with
//! `f64::from_bits`.

/// exp(m) for m = -104, ..., 90, rounded to nearest.
pub(crate) const EXP_M1: [u64; 195] = [
    0x368f1e6b68529e33u64,
    0x36a525be4e4e601du64,
    0x36bcbe0a45f75eb1u64,
    0x36d3884e838aea68u64,
    0x36ea8c1f14e2af5du64,
    0x37020a717e64a9bdu64,
    0x3718851d84118908u64,
    0x3730a9bdfb02d240u64,
    0x3746a5bea046b42eu64,
    0x375ec7f3b269efa8u64,
    0x3774eafb87eab0f2u64,
    0x378c6e2d05bbc000u64,
    0x37a35208867c2683u64,
    0x37ba425b317eeacdu64,
    0x37d1d8508fa8246au64,
    0x37e840fbc08fdc8au64,
    0x38007b7112bc1ffeu64,
    0x381666d0dad2961du64,
    0x382e726c3f64d0feu64,
    0x3844b0dc07cabf98u64,
    0x385c1f2daf3b6a46u64,
    0x38731c5957a47de2u64,
    0x3889f96445648b9fu64,
    0x38a1a6baeadb4fd1u64,
    0x38b7fd974d372e45u64,
    0x38d04da4d1452919u64,
    0x38e62891f06b3450u64,
    0x38fe1dd273aa8a4au64,
    0x3914775e0840bfddu64,
    0x392bd109d9d94bdau64,
    0x3942e73f53fba844u64,
    0x3959b138170d6bfeu64,
    0x397175af0cf60ec5u64,
    0x3987baee1bffa80bu64,
    0x39a02057d1245cebu64,
    0x39b5eafffb34ba31u64,
    0x39cdca23bae16424u64,
    0x39e43e7fc88b8056u64,
    0x39fb83bf23a9a9ebu64,
    0x3a12b2b8dd05b318u64,
    0x3a2969d47321e4ccu64,
    0x3a41452b7723aed2u64,
    0x3a5778fe2497184cu64,
    0x3a6fe7116182e9ccu64,
    0x3a85ae191a99585au64,
    0x3a9d775d87da854du64,
    0x3ab4063f8cc8bb98u64,
    0x3acb374b315f87c1u64,
    0x3ae27ec458c65e3cu64,
    0x3af923372c67a074u64,
    0x3b11152eaeb73c08u64,
    0x3b2737c5645114b5u64,
    0x3b3f8e6c24b5592eu64,
    0x3b5571db733a9d61u64,
    0x3b6d257d547e083fu64,
    0x3b83ce9b9de78f85u64,
    0x3b9aebabae3a41b5u64,
    0x3bb24b6031b49bdau64,
    0x3bc8dd5e1bb09d7eu64,
    0x3be0e5b73d1ff53du64,
    0x3bf6f741de1748ecu64,
    0x3c0f36bd37f42f3eu64,
    0x3c2536452ee2f75cu64,
    0x3c3cd480a1b74820u64,
    0x3c539792499b1a24u64,
    0x3c6aa0de4bf35b38u64,
    0x3c82188ad6ae3303u64,
    0x3c9898471fca6055u64,
    0x3cb0b6c3afdde064u64,
    0x3cc6b7719a59f0e0u64,
    0x3cdee001eed62aa0u64,
    0x3cf4fb547c775da8u64,
    0x3d0c8464f7616468u64,
    0x3d236121e24d3bbau64,
    0x3d3a56e0c2ac7f75u64,
    0x3d51e642baeb84a0u64,
    0x3d6853f01d6d53bau64,
    0x3d80885298767e9au64,
    0x3d967852a7007e42u64,
    0x3dae8a37a45fc32eu64,
    0x3dc4c1078fe9228au64,
    0x3ddc3527e433fab1u64,
    0x3df32b48bf117da2u64,
    0x3e0a0db0d0ddb3ecu64,
    0x3e21b48655f37267u64,
    0x3e381056ff2c5772u64,
    0x3e505a628c699fa1u64,
    0x3e6639e3175a689du64,
    0x3e7e355bbaee85cbu64,
    0x3e94875ca227ec38u64,
    0x3eabe6c6fdb01612u64,
    0x3ec2f6053b981d98u64,
    0x3ed9c54c3b43bc8bu64,
    0x3ef18354238f6764u64,
    0x3f07cd79b5647c9bu64,
    0x3f202cf22526545au64,
    0x3f35fc21041027adu64,
    0x3f4de16b9c24a98fu64,
    0x3f644e51f113d4d6u64,
    0x3f7b993fe00d5376u64,
    0x3f92c155b8213cf4u64,
    0x3fa97db0ccceb0afu64,
    0x3fc152aaa3bf81ccu64,
    0x3fd78b56362cef38u64,
    0x3ff0000000000000u64,
    0x4005bf0a8b145769u64,
    0x401d8e64b8d4ddaeu64,
    0x403415e5bf6fb106u64,
    0x404b4c902e273a58u64,
    0x40628d389970338fu64,
    0x407936dc5690c08fu64,
    0x409122885aaeddaau64,
    0x40a749ea7d470c6eu64,
    0x40bfa7157c470f82u64,
    0x40d5829dcf950560u64,
    0x40ed3c4488ee4f7fu64,
    0x4103de1654d37c9au64,
    0x411b00b5916ac955u64,
    0x413259ac48bf05d7u64,
    0x4148f0ccafad2a87u64,
    0x4160f2ebd0a80020u64,
    0x417709348c0ea4f9u64,
    0x418f4f22091940bdu64,
    0x41a546d8f9ed26e1u64,
    0x41bceb088b68e804u64,
    0x41d3a6e1fd9eecfdu64,
    0x41eab5adb9c43600u64,
    0x420226af33b1fdc1u64,
    0x4218ab7fb5475fb7u64,
    0x4230c3d3920962c9u64,
    0x4246c932696a6b5du64,
    0x425ef822f7f6731du64,
    0x42750bba3796379au64,
    0x428c9aae4631c056u64,
    0x42a370470aec28edu64,
    0x42ba6b765d8cdf6du64,
    0x42d1f43fcc4b662cu64,
    0x42e866f34a725782u64,
    0x4300953e2f3a1ef7u64,
    0x431689e221bc8d5bu64,
    0x432ea215a1d20d76u64,
    0x4344d13fbb1a001au64,
    0x435c4b334617cc67u64,
    0x43733a43d282a519u64,
    0x438a220d397972ebu64,
    0x43a1c25c88df6862u64,
    0x43b8232558201159u64,
    0x43d0672a3c9eb871u64,
    0x43e64b41c6d37832u64,
    0x43fe4cf766fe49beu64,
    0x44149767bc0483e3u64,
    0x442bfc951eb8bb76u64,
    0x444304d6aeca254bu64,
    0x4459d97010884251u64,
    0x44719103e4080b45u64,
    0x4487e013cd114461u64,
    0x44a03996528e074cu64,
    0x44b60d4f6fdac731u64,
    0x44cdf8c5af17ba3bu64,
    0x44e45e3076d61699u64,
    0x44fbaed16a6e0da7u64,
    0x4512cffdfebde1a1u64,
    0x4529919cabefcb69u64,
    0x454160345c9953e3u64,
    0x45579dbc9dc53c66u64,
    0x45700c810d464097u64,
    0x4585d009394c5c27u64,
    0x459da57de8f107a8u64,
    0x45b425982cf597cdu64,
    0x45cb61e5ca3a5e31u64,
    0x45e29bb825dfcf87u64,
    0x45f94a90db0d6fe2u64,
    0x46112fec759586fdu64,
    0x46275c1dc469e3afu64,
    0x463fbfd219c43b04u64,
    0x4655936d44e1a146u64,
    0x466d531d8a7ee79cu64,
    0x4683ed9d24a2d51bu64,
    0x469b15cfe5b6e17bu64,
    0x46b268038c2c0e00u64,
    0x46c9044a73545d48u64,
    0x46e1002ab6218b38u64,
    0x46f71b3540cbf921u64,
    0x470f6799ea9c414au64,
    0x47255779b984f3ebu64,
    0x473d01a210c44aa4u64,
    0x4753b63da8e91210u64,
    0x476aca8d6b0116b8u64,
    0x478234de9e0c74e9u64,
    0x4798bec7503ca477u64,
    0x47b0d0eda9796b90u64,
    0x47c6db0118477245u64,
    0x47df1056dc7bf22du64,
    0x47f51c2cc3433801u64,
    0x480cb108ffbec164u64,
];

/// exp(i / 128) for i = 0, ..., 127.
pub(crate) const EXP_M2: [u64; 128] = [
    0x3ff0000000000000u64,
    0x3ff0202015600446u64,
    0x3ff04080ab55de39u64,
    0x3ff06122436410ddu64,
    0x3ff08205601127edu64,
    0x3ff0a32a84e9c1f6u64,
    0x3ff0c49236829e8cu64,
    0x3ff0e63cfa7ab09du64,
    0x3ff1082b577d34edu64,
    0x3ff12a5dd543ccc5u64,
    0x3ff14cd4fc989cd6u64,
    0x3ff16f9157587069u64,
    0x3ff192937074e0cdu64,
    0x3ff1b5dbd3f68122u64,
    0x3ff1d96b0eff0e79u64,
    0x3ff1fd41afcba45eu64,
    0x3ff2216045b6f5cdu64,
    0x3ff245c7613b8a9bu64,
    0x3ff26a7793f60164u64,
    0x3ff28f7170a755fdu64,
    0x3ff2b4b58b372c79u64,
    0x3ff2da4478b620c7u64,
    0x3ff3001ecf601af7u64,
    0x3ff32645269ea829u64,
    0x3ff34cb8170b5835u64,
    0x3ff373783a722012u64,
    0x3ff39a862bd3c106u64,
    0x3ff3c1e2876834aau64,
    0x3ff3e98deaa11dccu64,
    0x3ff41188f42c3e32u64,
    0x3ff439d443f5f159u64,
    0x3ff462707b2bac21u64,
    0x3ff48b5e3c3e8186u64,
    0x3ff4b49e2ae5ac67u64,
    0x3ff4de30ec211e60u64,
    0x3ff50817263c13cdu64,
    0x3ff5325180cfacf7u64,
    0x3ff55ce0a4c58c7cu64,
    0x3ff587c53c5a7af0u64,
    0x3ff5b2fff3210fd9u64,
    0x3ff5de9176045ff5u64,
    0x3ff60a7a734ab0e8u64,
    0x3ff636bb9a983258u64,
    0x3ff663559cf1bc7cu64,
    0x3ff690492cbf9433u64,
    0x3ff6bd96fdd034a2u64,
    0x3ff6eb3fc55b1e76u64,
    0x3ff719443a03acb9u64,
    0x3ff747a513dbef6au64,
    0x3ff776630c678bc1u64,
    0x3ff7a57ede9ea23eu64,
    0x3ff7d4f946f0ba8du64,
    0x3ff804d30347b546u64,
    0x3ff8350cd30ac390u64,
    0x3ff865a7772164c5u64,
    0x3ff896a3b1f66a0eu64,
    0x3ff8c802477b0010u64,
    0x3ff8f9c3fd29beafu64,
    0x3ff92be99a09bf00u64,
    0x3ff95e73e6b1b75eu64,
    0x3ff99163ad4b1dccu64,
    0x3ff9c4b9b995509bu64,
    0x3ff9f876d8e8c566u64,
    0x3ffa2c9bda3a3e78u64,
    0x3ffa61298e1e069cu64,
    0x3ffa9620c6cb3374u64,
    0x3ffacb82581eee54u64,
    0x3ffb014f179fc3b8u64,
    0x3ffb3787dc80f95fu64,
    0x3ffb6e2d7fa5eb18u64,
    0x3ffba540dba56e56u64,
    0x3ffbdcc2cccd3c85u64,
    0x3ffc14b431256446u64,
    0x3ffc4d15e873c193u64,
    0x3ffc85e8d43f7cd0u64,
    0x3ffcbf2dd7d490f2u64,
    0x3ffcf8e5d84758a9u64,
    0x3ffd3311bc7822b4u64,
    0x3ffd6db26d16cd67u64,
    0x3ffda8c8d4a66969u64,
    0x3ffde455df80e3c0u64,
    0x3ffe205a7bdab73eu64,
    0x3ffe5cd799c6a54eu64,
    0x3ffe99ce2b397649u64,
    0x3ffed73f240dc142u64,
    0x3fff152b7a07bb76u64,
    0x3fff539424d90f5eu64,
    0x3fff927a1e24bb76u64,
    0x3fffd1de6182f8c9u64,
    0x400008e0f64294abu64,
    0x40002912df5ce72au64,
    0x400049856cd84339u64,
    0x40006a39207f0a09u64,
    0x40008b2e7d2035cfu64,
    0x4000ac6606916501u64,
    0x4000cde041b0e9aeu64,
    0x4000ef9db467dcf8u64,
    0x4001119ee5ac36b6u64,
    0x400133e45d82e952u64,
    0x4001566ea50201d7u64,
    0x4001793e4652cc50u64,
    0x40019c53ccb3fc6bu64,
    0x4001bfafc47bda73u64,
    0x4001e352bb1a74adu64,
    0x4002073d3f1bd518u64,
    0x40022b6fe02a3b9cu64,
    0x40024feb2f105cb8u64,
    0x400274afbdbba4a6u64,
    0x400299be1f3e7f1cu64,
    0x4002bf16e7d2a38cu64,
    0x4002e4baacdb6614u64,
    0x40030aaa04e80d05u64,
    0x400330e587b62b28u64,
    0x4003576dce33feadu64,
    0x40037e437282d4eeu64,
    0x4003a5670ff972edu64,
    0x4003ccd9432682b4u64,
    0x4003f49aa9d30590u64,
    0x40041cabe304cb34u64,
    0x4004450d8f00edd4u64,
    0x40046dc04f4e5338u64,
    0x400496c4c6b832dau64,
    0x4004c01b9950a111u64,
    0x4004e9c56c731f5du64,
    0x400513c2e6c731d7u64,
    0x40053e14b042f9cau64,
    0x400568bb722dd593u64,
    0x400593b7d72305bbu64,
];

/// 2^(i / 64) for i = 0, ..., 63.
pub(crate) const EXP2_MID: [u64; 64] = [
    0x3ff0000000000000u64,
    0x3ff02c9a3e778061u64,
    0x3ff059b0d3158574u64,
    0x3ff0874518759bc8u64,
    0x3ff0b5586cf9890fu64,
    0x3ff0e3ec32d3d1a2u64,
    0x3ff11301d0125b51u64,
    0x3ff1429aaea92de0u64,
    0x3ff172b83c7d517bu64,
    0x3ff1a35beb6fcb75u64,
    0x3ff1d4873168b9aau64,
    0x3ff2063b88628cd6u64,
    0x3ff2387a6e756238u64,
    0x3ff26b4565e27cddu64,
    0x3ff29e9df51fdee1u64,
    0x3ff2d285a6e4030bu64,
    0x3ff306fe0a31b715u64,
    0x3ff33c08b26416ffu64,
    0x3ff371a7373aa9cbu64,
    0x3ff3a7db34e59ff7u64,
    0x3ff3dea64c123422u64,
    0x3ff4160a21f72e2au64,
    0x3ff44e086061892du64,
    0x3ff486a2b5c13cd0u64,
    0x3ff4bfdad5362a27u64,
    0x3ff4f9b2769d2ca7u64,
    0x3ff5342b569d4f82u64,
    0x3ff56f4736b527dau64,
    0x3ff5ab07dd485429u64,
    0x3ff5e76f15ad2148u64,
    0x3ff6247eb03a5585u64,
    0x3ff6623882552225u64,
    0x3ff6a09e667f3bcdu64,
    0x3ff6dfb23c651a2fu64,
    0x3ff71f75e8ec5f74u64,
    0x3ff75feb564267c9u64,
    0x3ff7a11473eb0187u64,
    0x3ff7e2f336cf4e62u64,
    0x3ff82589994cce13u64,
    0x3ff868d99b4492edu64,
    0x3ff8ace5422aa0dbu64,
    0x3ff8f1ae99157736u64,
    0x3ff93737b0cdc5e5u64,
    0x3ff97d829fde4e50u64,
    0x3ff9c49182a3f090u64,
    0x3ffa0c667b5de565u64,
    0x3ffa5503b23e255du64,
    0x3ffa9e6b5579fdbfu64,
    0x3ffae89f995ad3adu64,
    0x3ffb33a2b84f15fbu64,
    0x3ffb7f76f2fb5e47u64,
    0x3ffbcc1e904bc1d2u64,
    0x3ffc199bdd85529cu64,
    0x3ffc67f12e57d14bu64,
    0x3ffcb720dcef9069u64,
    0x3ffd072d4a07897cu64,
    0x3ffd5818dcfba487u64,
    0x3ffda9e603db3285u64,
    0x3ffdfc97337b9b5fu64,
    0x3ffe502ee78b3ff6u64,
    0x3ffea4afa2a490dau64,
    0x3ffefa1bee615a27u64,
    0x3fff50765b6e4540u64,
    0x3fffa7c1819e90d8u64,
];

/// 2^(i / 128) for i = 0, ..., 127 as (hi, lo) pairs with
/// `hi + lo` accurate to about 107 bits.
pub(crate) const EXP2_MID_DD: [u64; 256] = [
    0x3ff0000000000000, 0x0000000000000000,
    0x3ff0163da9fb3335, 0x3c9b61299ab8cdb7,
    0x3ff02c9a3e778061, 0xbc719083535b085d,
    0x3ff04315e86e7f85, 0xbc90a31c1977c96e,
    0x3ff059b0d3158574, 0x3c8d73e2a475b465,
    0x3ff0706b29ddf6de, 0xbc8c91dfe2b13c27,
    0x3ff0874518759bc8, 0x3c6186be4bb284ff,
    0x3ff09e3ecac6f383, 0x3c91487818316136,
    0x3ff0b5586cf9890f, 0x3c98a62e4adc610b,
    0x3ff0cc922b7247f7, 0x3c901edc16e24f71,
    0x3ff0e3ec32d3d1a2, 0x3c403a1727c57b53,
    0x3ff0fb66affed31b, 0xbc6b9bedc44ebd7b,
    0x3ff11301d0125b51, 0xbc96c51039449b3a,
    0x3ff12abdc06c31cc, 0xbc51b514b36ca5c7,
    0x3ff1429aaea92de0, 0xbc932fbf9af1369e,
    0x3ff15a98c8a58e51, 0x3c82406ab9eeab0a,
    0x3ff172b83c7d517b, 0xbc819041b9d78a76,
    0x3ff18af9388c8dea, 0xbc911023d1970f6c,
    0x3ff1a35beb6fcb75, 0x3c8e5b4c7b4968e4,
    0x3ff1bbe084045cd4, 0xbc995386352ef607,
    0x3ff1d4873168b9aa, 0x3c9e016e00a2643c,
    0x3ff1ed5022fcd91d, 0xbc91df98027bb78c,
    0x3ff2063b88628cd6, 0x3c8dc775814a8495,
    0x3ff21f49917ddc96, 0x3c82a97e9494a5ee,
    0x3ff2387a6e756238, 0x3c99b07eb6c70573,
    0x3ff251ce4fb2a63f, 0x3c8ac155bef4f4a4,
    0x3ff26b4565e27cdd, 0x3c82bd339940e9d9,
    0x3ff284dfe1f56381, 0xbc9a4c3a8c3f0d7e,
    0x3ff29e9df51fdee1, 0x3c8612e8afad1255,
    0x3ff2b87fd0dad990, 0xbc410adcd6381aa4,
    0x3ff2d285a6e4030b, 0x3c90024754db41d5,
    0x3ff2ecafa93e2f56, 0x3c71ca0f45d52383,
    0x3ff306fe0a31b715, 0x3c86f46ad23182e4,
    0x3ff32170fc4cd831, 0x3c8a9ce78e18047c,
    0x3ff33c08b26416ff, 0x3c932721843659a6,
    0x3ff356c55f929ff1, 0xbc8b5cee5c4e4628,
    0x3ff371a7373aa9cb, 0xbc963aeabf42eae2,
    0x3ff38cae6d05d866, 0xbc9e958d3c9904bd,
    0x3ff3a7db34e59ff7, 0xbc75e436d661f5e3,
    0x3ff3c32dc313a8e5, 0xbc9efff8375d29c3,
    0x3ff3dea64c123422, 0x3c8ada0911f09ebc,
    0x3ff3fa4504ac801c, 0xbc97d023f956f9f3,
    0x3ff4160a21f72e2a, 0xbc5ef3691c309278,
    0x3ff431f5d950a897, 0xbc81c7dde35f7999,
    0x3ff44e086061892d, 0x3c489b7a04ef80d0,
    0x3ff46a41ed1d0057, 0x3c9c944bd1648a76,
    0x3ff486a2b5c13cd0, 0x3c73c1a3b69062f0,
    0x3ff4a32af0d7d3de, 0x3c99cb62f3d1be56,
    0x3ff4bfdad5362a27, 0x3c7d4397afec42e2,
    0x3ff4dcb299fddd0d, 0x3c98ecdbbc6a7833,
    0x3ff4f9b2769d2ca7, 0xbc94b309d25957e3,
    0x3ff516daa2cf6642, 0xbc8f768569bd93ef,
    0x3ff5342b569d4f82, 0xbc807abe1db13cad,
    0x3ff551a4ca5d920f, 0xbc8d689cefede59b,
    0x3ff56f4736b527da, 0x3c99bb2c011d93ad,
    0x3ff58d12d497c7fd, 0x3c8295e15b9a1de8,
    0x3ff5ab07dd485429, 0x3c96324c054647ad,
    0x3ff5c9268a5946b7, 0x3c3c4b1b816986a2,
    0x3ff5e76f15ad2148, 0x3c9ba6f93080e65e,
    0x3ff605e1b976dc09, 0xbc93e2429b56de47,
    0x3ff6247eb03a5585, 0xbc9383c17e40b497,
    0x3ff6434634ccc320, 0xbc8c483c759d8933,
    0x3ff6623882552225, 0xbc9bb60987591c34,
    0x3ff68155d44ca973, 0x3c6038ae44f73e65,
    0x3ff6a09e667f3bcd, 0xbc9bdd3413b26456,
    0x3ff6c012750bdabf, 0xbc72895667ff0b0d,
    0x3ff6dfb23c651a2f, 0xbc6bbe3a683c88ab,
    0x3ff6ff7df9519484, 0xbc883c0f25860ef6,
    0x3ff71f75e8ec5f74, 0xbc816e4786887a99,
    0x3ff73f9a48a58174, 0xbc90a8d96c65d53c,
    0x3ff75feb564267c9, 0xbc90245957316dd3,
    0x3ff780694fde5d3f, 0x3c9866b80a02162d,
    0x3ff7a11473eb0187, 0xbc841577ee04992f,
    0x3ff7c1ed0130c132, 0x3c9f124cd1164dd6,
    0x3ff7e2f336cf4e62, 0x3c705d02ba15797e,
    0x3ff80427543e1a12, 0xbc927c86626d972b,
    0x3ff82589994cce13, 0xbc9d4c1dd41532d8,
    0x3ff8471a4623c7ad, 0xbc88d684a341cdfb,
    0x3ff868d99b4492ed, 0xbc9fc6f89bd4f6ba,
    0x3ff88ac7d98a6699, 0x3c9994c2f37cb53a,
    0x3ff8ace5422aa0db, 0x3c96e9f156864b27,
    0x3ff8cf3216b5448c, 0xbc70d55e32e9e3aa,
    0x3ff8f1ae99157736, 0x3c85cc13a2e3976c,
    0x3ff9145b0b91ffc6, 0xbc9dd6792e582524,
    0x3ff93737b0cdc5e5, 0xbc675fc781b57ebc,
    0x3ff95a44cbc8520f, 0xbc764b7c96a5f039,
    0x3ff97d829fde4e50, 0xbc9d185b7c1b85d1,
    0x3ff9a0f170ca07ba, 0xbc9173bd91cee632,
    0x3ff9c49182a3f090, 0x3c7c7c46b071f2be,
    0x3ff9e86319e32323, 0x3c7824ca78e64c6e,
    0x3ffa0c667b5de565, 0xbc9359495d1cd533,
    0x3ffa309bec4a2d33, 0x3c96305c7ddc36ab,
    0x3ffa5503b23e255d, 0xbc9d2f6edb8d41e1,
    0x3ffa799e1330b358, 0x3c9bcb7ecac563c7,
    0x3ffa9e6b5579fdbf, 0x3c90fac90ef7fd31,
    0x3ffac36bbfd3f37a, 0xbc8f9234cae76cd0,
    0x3ffae89f995ad3ad, 0x3c97a1cd345dcc81,
    0x3ffb0e07298db666, 0xbc9bdef54c80e425,
    0x3ffb33a2b84f15fb, 0xbc62805e3084d708,
    0x3ffb59728de5593a, 0xbc9c71dfbbba6de3,
    0x3ffb7f76f2fb5e47, 0xbc75584f7e54ac3b,
    0x3ffba5b030a1064a, 0xbc9efcd30e54292e,
    0x3ffbcc1e904bc1d2, 0x3c823dd07a2d9e84,
    0x3ffbf2c25bd71e09, 0xbc9efdca3f6b9c73,
    0x3ffc199bdd85529c, 0x3c811065895048dd,
    0x3ffc40ab5fffd07a, 0x3c9b4537e083c60a,
    0x3ffc67f12e57d14b, 0x3c92884dff483cad,
    0x3ffc8f6d9406e7b5, 0x3c71acbc48805c44,
    0x3ffcb720dcef9069, 0x3c7503cbd1e949db,
    0x3ffcdf0b555dc3fa, 0xbc8dd83b53829d72,
    0x3ffd072d4a07897c, 0xbc9cbc3743797a9c,
    0x3ffd2f87080d89f2, 0xbc9d487b719d8578,
    0x3ffd5818dcfba487, 0x3c82ed02d75b3707,
    0x3ffd80e316c98398, 0xbc911ec18beddfe8,
    0x3ffda9e603db3285, 0x3c9c2300696db532,
    0x3ffdd321f301b460, 0x3c92da5778f018c3,
    0x3ffdfc97337b9b5f, 0xbc91a5cd4f184b5c,
    0x3ffe264614f5a129, 0xbc97b627817a1496,
    0x3ffe502ee78b3ff6, 0x3c839e8980a9cc8f,
    0x3ffe7a51fbc74c83, 0x3c92d522ca0c8de2,
    0x3ffea4afa2a490da, 0xbc9e9c23179c2893,
    0x3ffecf482d8e67f1, 0xbc9c93f3b411ad8c,
    0x3ffefa1bee615a27, 0x3c9dc7f486a4b6b0,
    0x3fff252b376bba97, 0x3c93a1a5bf0d8e43,
    0x3fff50765b6e4540, 0x3c99d3e12dd8a18b,
    0x3fff7bfdad9cbe14, 0xbc9dbb12d006350a,
    0x3fffa7c1819e90d8, 0x3c874853f3a5931e,
    0x3fffd3c22b8f71f1, 0x3c62eb74966579e7,
];

/// 1 / (1 + j / 128) for j = -32, ..., 64, rounded to nearest.
pub(crate) const LOG_RCP: [u64; 97] = [
    0x3ff5555555555555, 0x3ff51d07eae2f815, 0x3ff4e5e0a72f0539, 0x3ff4afd6a052bf5b,
    0x3ff47ae147ae147b, 0x3ff446f86562d9fb, 0x3ff4141414141414, 0x3ff3e22cbce4a902,
    0x3ff3b13b13b13b14, 0x3ff3813813813814, 0x3ff3521cfb2b78c1, 0x3ff323e34a2b10bf,
    0x3ff2f684bda12f68, 0x3ff2c9fb4d812ca0, 0x3ff29e4129e4129e, 0x3ff27350b8812735,
    0x3ff2492492492492, 0x3ff21fb78121fb78, 0x3ff1f7047dc11f70, 0x3ff1cf06ada2811d,
    0x3ff1a7b9611a7b96, 0x3ff1811811811812, 0x3ff15b1e5f75270d, 0x3ff135c81135c811,
    0x3ff1111111111111, 0x3ff0ecf56be69c90, 0x3ff0c9714fbcda3b, 0x3ff0a6810a6810a7,
    0x3ff0842108421084, 0x3ff0624dd2f1a9fc, 0x3ff0410410410410, 0x3ff0204081020408,
    0x3ff0000000000000, 0x3fefc07f01fc07f0, 0x3fef81f81f81f820, 0x3fef44659e4a4271,
    0x3fef07c1f07c1f08, 0x3feecc07b301ecc0, 0x3fee9131abf0b767, 0x3fee573ac901e574,
    0x3fee1e1e1e1e1e1e, 0x3fede5d6e3f8868a, 0x3fedae6076b981db, 0x3fed77b654b82c34,
    0x3fed41d41d41d41d, 0x3fed0cb58f6ec074, 0x3fecd85689039b0b, 0x3feca4b3055ee191,
    0x3fec71c71c71c71c, 0x3fec3f8f01c3f8f0, 0x3fec0e070381c0e0, 0x3febdd2b899406f7,
    0x3febacf914c1bad0, 0x3feb7d6c3dda338b, 0x3feb4e81b4e81b4f, 0x3feb2036406c80d9,
    0x3feaf286bca1af28, 0x3feac5701ac5701b, 0x3fea98ef606a63be, 0x3fea6d01a6d01a6d,
    0x3fea41a41a41a41a, 0x3fea16d3f97a4b02, 0x3fe9ec8e951033d9, 0x3fe9c2d14ee4a102,
    0x3fe999999999999a, 0x3fe970e4f80cb872, 0x3fe948b0fcd6e9e0, 0x3fe920fb49d0e229,
    0x3fe8f9c18f9c18fa, 0x3fe8d3018d3018d3, 0x3fe8acb90f6bf3aa, 0x3fe886e5f0abb04a,
    0x3fe8618618618618, 0x3fe83c977ab2bedd, 0x3fe8181818181818, 0x3fe7f405fd017f40,
    0x3fe7d05f417d05f4, 0x3fe7ad2208e0ecc3, 0x3fe78a4c8178a4c8, 0x3fe767dce434a9b1,
    0x3fe745d1745d1746, 0x3fe724287f46debc, 0x3fe702e05c0b8170, 0x3fe6e1f76b4337c7,
    0x3fe6c16c16c16c17, 0x3fe6a13cd1537290, 0x3fe6816816816817, 0x3fe661ec6a5122f9,
    0x3fe642c8590b2164, 0x3fe623fa77016240, 0x3fe6058160581606, 0x3fe5e75bb8d015e7,
    0x3fe5c9882b931057, 0x3fe5ac056b015ac0, 0x3fe58ed2308158ed, 0x3fe571ed3c506b3a,
    0x3fe5555555555555,
];

/// ln(1 + j / 128) for j = -32, ..., 64.
pub(crate) const LOG_C: [u64; 97] = [
    0xbfd269621134db92, 0xbfd1bf99635a6b95, 0xbfd1178e8227e47c, 0xbfd07138604d5862,
    0xbfcf991c6cb3b379, 0xbfce530effe71012, 0xbfcd1037f2655e7b, 0xbfcbd087383bd8ad,
    0xbfca93ed3c8ad9e3, 0xbfc95a5adcf7017f, 0xbfc823c16551a3c2, 0xbfc6f0128b756abc,
    0xbfc5bf406b543db2, 0xbfc4913d8333b561, 0xbfc365fcb0159016, 0xbfc23d712a49c202,
    0xbfc1178e8227e47c, 0xbfbfe89139dbd566, 0xbfbda727638446a2, 0xbfbb6ac88dad5b1c,
    0xbfb9335e5d594989, 0xbfb700d30aeac0e1, 0xbfb4d3115d207eac, 0xbfb2aa04a44717a5,
    0xbfb08598b59e3a07, 0xbfaccb73cdddb2cc, 0xbfa894aa149fb343, 0xbfa466aed42de3ea,
    0xbfa0415d89e74444, 0xbf98492528c8cabf, 0xbf90205658935847, 0xbf8010157588de71,
    0x0000000000000000, 0x3f7fe02a6b106789, 0x3f8fc0a8b0fc03e4, 0x3f97b91b07d5b11b,
    0x3f9f829b0e783300, 0x3fa39e87b9febd60, 0x3fa77458f632dcfc, 0x3fab42dd711971bf,
    0x3faf0a30c01162a6, 0x3fb16536eea37ae1, 0x3fb341d7961bd1d1, 0x3fb51b073f06183f,
    0x3fb6f0d28ae56b4c, 0x3fb8c345d6319b21, 0x3fba926d3a4ad563, 0x3fbc5e548f5bc743,
    0x3fbe27076e2af2e6, 0x3fbfec9131dbeabb, 0x3fc0d77e7cd08e59, 0x3fc1b72ad52f67a0,
    0x3fc29552f81ff523, 0x3fc371fc201e8f74, 0x3fc44d2b6ccb7d1e, 0x3fc526e5e3a1b438,
    0x3fc5ff3070a793d4, 0x3fc6d60fe719d21d, 0x3fc7ab890210d909, 0x3fc87fa06520c911,
    0x3fc9525a9cf456b4, 0x3fca23bc1fe2b563, 0x3fcaf3c94e80bff3, 0x3fcbc286742d8cd6,
    0x3fcc8ff7c79a9a22, 0x3fcd5c216b4fbb91, 0x3fce27076e2af2e6, 0x3fcef0adcbdc5936,
    0x3fcfb9186d5e3e2b, 0x3fd0402594b4d041, 0x3fd0a324e27390e3, 0x3fd1058bf9ae4ad5,
    0x3fd1675cababa60e, 0x3fd1c898c16999fb, 0x3fd22941fbcf7966, 0x3fd2895a13de86a3,
    0x3fd2e8e2bae11d31, 0x3fd347dd9a987d55, 0x3fd3a64c556945ea, 0x3fd404308686a7e4,
    0x3fd4618bc21c5ec2, 0x3fd4be5f957778a1, 0x3fd51aad872df82d, 0x3fd5767717455a6c,
    0x3fd5d1bdbf5809ca, 0x3fd62c82f2b9c795, 0x3fd686c81e9b14af, 0x3fd6e08eaa2ba1e4,
    0x3fd739d7f6bbd007, 0x3fd792a55fdd47a2, 0x3fd7eaf83b82afc3, 0x3fd842d1da1e8b17,
    0x3fd89a3386c1425b, 0x3fd8f11e873662c7, 0x3fd947941c2116fb, 0x3fd99d958117e08b,
    0x3fd9f323ecbf984c,
];

/// log2(1 + j / 128) for j = -32, ..., 64.
pub(crate) const LOG2_C: [u64; 97] = [
    0xbfda8ff971810a5e, 0xbfd99b072a96c6b2, 0xbfd8a8980abfbd32, 0xbfd7b89f02cf2aad,
    0xbfd6cb0f6865c8ea, 0xbfd5dfdcf1eeae0e, 0xbfd4f6fbb2cec598, 0xbfd4106017c3eca3,
    0xbfd32bfee370ee68, 0xbfd249cd2b13cd6c, 0xbfd169c05363f158, 0xbfd08bce0d95fa38,
    0xbfcf5fd8a9063e35, 0xbfcdac22d3e441d3, 0xbfcbfc67a7fff4cc, 0xbfca5094b54d2828,
    0xbfc8a8980abfbd32, 0xbfc7046031c79f85, 0xbfc563dc29ffacb2, 0xbfc3c6fb650cde51,
    0xbfc22dadc2ab3497, 0xbfc097e38ce60649, 0xbfbe0b1ae8f2fd56, 0xbfbaed391ab6674e,
    0xbfb7d60496cfbb4c, 0xbfb4c560fe68af88, 0xbfb1bb32a600549d, 0xbfad6ebd1f1febfe,
    0xbfa77394c9d958d5, 0xbfa184b8e4c56af8, 0xbf9743ee861f3556, 0xbf872c7ba20f7327,
    0x0000000000000000, 0x3f86fe50b6ef0851, 0x3f96e79685c2d22a, 0x3fa11cd1d5133413,
    0x3fa6bad3758efd87, 0x3fac4dfab90aab5f, 0x3fb0eb389fa29f9b, 0x3fb3aa2fdd27f1c3,
    0x3fb663f6fac91316, 0x3fb918a16e46335b, 0x3fbbc84240adabba, 0x3fbe72ec117fa5b2,
    0x3fc08c588cda79e4, 0x3fc1dcd197552b7b, 0x3fc32ae9e278ae1a, 0x3fc476a9f983f74d,
    0x3fc5c01a39fbd688, 0x3fc70742d4ef027f, 0x3fc84c2bd02f03b3, 0x3fc98edd077e70df,
    0x3fcacf5e2db4ec94, 0x3fcc0db6cdd94dee, 0x3fcd49ee4c325970, 0x3fce840be74e6a4d,
    0x3fcfbc16b902680a, 0x3fd0790adbb03009, 0x3fd11307dad30b76, 0x3fd1ac05b291f070,
    0x3fd24407ab0e073a, 0x3fd2db10fc4d9aaf, 0x3fd37124cea4cded, 0x3fd406463b1b0449,
    0x3fd49a784bcd1b8b, 0x3fd52dbdfc4c96b3, 0x3fd5c01a39fbd688, 0x3fd6518fe4677ba7,
    0x3fd6e221cd9d0cde, 0x3fd771d2ba7efb3c, 0x3fd800a563161c54, 0x3fd88e9c72e0b226,
    0x3fd91bba891f1709, 0x3fd9a802391e232f, 0x3fda33760a7f6051, 0x3fdabe18797f1f49,
    0x3fdb47ebf73882a1, 0x3fdbd0f2e9e79031, 0x3fdc592fad295b56, 0x3fdce0a4923a587d,
    0x3fdd6753e032ea0f, 0x3fdded3fd442364c, 0x3fde726aa1e754d2, 0x3fdef6d67328e220,
    0x3fdf7a8568cb06cf, 0x3fdffd799a83ff9b, 0x3fe03fda8b97997f, 0x3fe0809cf27f703d,
    0x3fe0c10500d63aa6, 0x3fe10113b153c8ea, 0x3fe140c9faa1e544, 0x3fe18028cf72976a,
    0x3fe1bf311e95d00e, 0x3fe1fde3d30e8126, 0x3fe23c41d42727c8, 0x3fe27a4c0585cbf8,
    0x3fe2b803473f7ad1,
];
